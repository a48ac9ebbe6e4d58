// PPE Detection Kit site - Leptos 0.8 Edition

mod feed;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{AboutPage, DemoPage, HomePage};
use sections::Nav;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // One line for whoever opens the console expecting a real pipeline
    Effect::new(move || {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!(
            "PPE Detection Kit {} | simulated feed, no frames are processed",
            sections::VERSION
        )));
    });

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/demo") view=DemoPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </main>
        </Router>
    }
}
