use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "AI-Powered Safety Monitoring"
                    </div>
                    <h1 class="hero-title">
                        "PPE Detection Kit"
                        <br />
                        <span class="hero-title-accent">"for Manufacturing"</span>
                    </h1>
                    <p class="hero-description">
                        "Advanced computer vision system that detects Personal Protective Equipment "
                        "violations in real-time, ensuring workplace safety compliance in automobile "
                        "manufacturing."
                    </p>
                    <div class="hero-highlights">
                        <span class="hero-highlight">"Real-time Detection"</span>
                        <span class="hero-highlight">"Multi-PPE Recognition"</span>
                        <span class="hero-highlight">"Instant Alerts"</span>
                    </div>
                    <div class="hero-actions">
                        <a href="/demo" class="btn btn-primary">
                            "Try Live Demo"
                        </a>
                        <a href="/about" class="btn btn-secondary">
                            "View Documentation"
                        </a>
                    </div>
                </div>
                <Preview />
            </div>
        </section>
    }
}

/// Static demo preview: two pinned boxes over a fake viewport, no timer.
#[component]
fn Preview() -> impl IntoView {
    view! {
        <div class="hero-preview">
            <div class="preview-viewport">
                <div class="preview-spinner"></div>
                <p class="preview-caption">"Live Detection Preview"</p>

                <div class="detection-box compliant preview-box-left">
                    <span class="detection-label">"Hardhat 95%"</span>
                </div>
                <div class="detection-box violation preview-box-right">
                    <span class="detection-label">"NO-Mask 87%"</span>
                </div>

                <div class="scan-line"></div>
            </div>
        </div>
    }
}
