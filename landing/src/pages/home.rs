// Home page - hero, features, demo preview, tech specs
use crate::sections::{Features, Footer, Hero, LiveDemo, TechSpecs};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
        <LiveDemo />
        <TechSpecs />
        <Footer />
    }
}
