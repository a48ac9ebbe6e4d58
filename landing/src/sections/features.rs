use leptos::prelude::*;
use simfeed::{ClassKind, PpeClass};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Powerful Features for "
                        <span class="accent">"Workplace Safety"</span>
                    </h2>
                    <p class="section-description">
                        "Our AI-powered PPE detection system provides comprehensive safety "
                        "monitoring with advanced computer vision capabilities."
                    </p>
                </div>

                <div class="features-grid">
                    <FeatureCard
                        icon="[1]"
                        title="Multi-PPE Detection"
                        description="Detects hardhats, masks, safety vests, gloves, and more with high accuracy"
                    />
                    <FeatureCard
                        icon="[2]"
                        title="Real-time Monitoring"
                        description="Live video processing with instant violation detection and alerts"
                    />
                    <FeatureCard
                        icon="[3]"
                        title="Instant Alerts"
                        description="Audio and visual alerts triggered immediately upon violation detection"
                    />
                    <FeatureCard
                        icon="[4]"
                        title="Violation Tracking"
                        description="Captures and stores violation images with timestamps for compliance records"
                    />
                    <FeatureCard
                        icon="[5]"
                        title="Multi-Source Input"
                        description="Works with webcams, IP cameras, and pre-recorded video files"
                    />
                    <FeatureCard
                        icon="[6]"
                        title="Performance Analytics"
                        description="Real-time FPS monitoring and detection confidence scoring"
                    />
                </div>

                <DetectionClasses />
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

/// The full class taxonomy the simulated model "supports", color-coded the
/// same way the detection boxes are.
#[component]
fn DetectionClasses() -> impl IntoView {
    view! {
        <div class="class-showcase">
            <h3 class="class-showcase-title">"Detection Classes"</h3>
            <div class="class-grid">
                {PpeClass::ALL
                    .into_iter()
                    .map(|class| {
                        let dot = match class.kind() {
                            ClassKind::Compliant => "class-dot compliant",
                            ClassKind::Violation => "class-dot violation",
                            ClassKind::Neutral => "class-dot neutral",
                        };
                        view! {
                            <div class="class-chip">
                                <span class=dot></span>
                                <span class="class-name">{class.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
