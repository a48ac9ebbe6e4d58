use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-logo">"[+]"</span>
                        <span class="footer-title">"PPE Detection Kit"</span>
                        <p class="footer-tagline">
                            "Advanced AI-powered Personal Protective Equipment detection system "
                            "for manufacturing environments. Ensuring workplace safety through "
                            "real-time computer vision monitoring."
                        </p>
                    </div>
                    <div class="footer-column">
                        <h3 class="footer-heading">"Features"</h3>
                        <a href="/#features" class="footer-link">"Real-time Detection"</a>
                        <a href="/#features" class="footer-link">"Multi-PPE Recognition"</a>
                        <a href="/#features" class="footer-link">"Instant Alerts"</a>
                        <a href="/#features" class="footer-link">"Violation Tracking"</a>
                        <a href="/#features" class="footer-link">"Performance Analytics"</a>
                    </div>
                    <div class="footer-column">
                        <h3 class="footer-heading">"Resources"</h3>
                        <a href="/about" class="footer-link">"Documentation"</a>
                        <a href="/demo" class="footer-link">"Live Demo"</a>
                        <a href="/about" class="footer-link">"Model Training"</a>
                        <a href="/about" class="footer-link">"Support"</a>
                    </div>
                </div>
                <p class="footer-copyright">
                    "(c) 2024 PPE Detection Kit. Built for workplace safety."
                </p>
            </div>
        </footer>
    }
}
