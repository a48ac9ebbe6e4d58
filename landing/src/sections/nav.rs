use super::VERSION;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"[+]"</span>
                    <span class="nav-title">"PPE Detection Kit"</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    <a href="/" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "Home"
                    </a>
                    <a href="/demo" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "Live Demo"
                    </a>
                    <a href="/about" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "About"
                    </a>
                    <a href="/demo" class="nav-cta">"Try the Demo"</a>
                </div>
                <button
                    class="nav-menu-btn"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>
        </nav>
    }
}
