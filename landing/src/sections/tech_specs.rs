use leptos::prelude::*;

#[component]
pub fn TechSpecs() -> impl IntoView {
    view! {
        <section id="specs" class="tech-specs">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Technical "
                        <span class="accent">"Specifications"</span>
                    </h2>
                    <p class="section-description">
                        "Built with cutting-edge AI and computer vision technologies for "
                        "industrial-grade performance and reliability."
                    </p>
                </div>

                <div class="specs-grid">
                    <SpecCard
                        category="AI Model"
                        items=vec![
                            ("Framework", "YOLOv8 (Ultralytics)"),
                            ("Model Size", "87.7MB"),
                            ("Classes", "10+ PPE Items"),
                            ("Accuracy", "85%+ mAP@0.5"),
                        ]
                    />
                    <SpecCard
                        category="Performance"
                        items=vec![
                            ("FPS", "25-35 (Real-time)"),
                            ("Inference Time", "<50ms"),
                            ("Resolution", "640x640 - 1280x720"),
                            ("GPU Support", "CUDA Enabled"),
                        ]
                    />
                    <SpecCard
                        category="Detection"
                        items=vec![
                            ("Hardhat", "94.2% Precision"),
                            ("Mask", "94.3% Precision"),
                            ("Safety Vest", "100% Precision"),
                            ("Violations", "Real-time Alerts"),
                        ]
                    />
                    <SpecCard
                        category="Technology"
                        items=vec![
                            ("Frontend", "Rust + Leptos (WASM)"),
                            ("Computer Vision", "OpenCV"),
                            ("Deep Learning", "PyTorch"),
                            ("Deployment", "Edge / On-premise"),
                        ]
                    />
                </div>

                <Architecture />
            </div>
        </section>
    }
}

#[component]
fn SpecCard(
    category: &'static str,
    items: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="spec-card">
            <h3 class="spec-category">{category}</h3>
            <div class="spec-items">
                {items
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="spec-item">
                                <span class="spec-label">{label}</span>
                                <span class="spec-value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Architecture() -> impl IntoView {
    view! {
        <div class="architecture">
            <h3 class="architecture-title">"System Architecture"</h3>
            <div class="architecture-grid">
                <ArchStage
                    title="Input Sources"
                    items=vec!["Webcam", "IP Camera", "Video Files"]
                />
                <ArchStage
                    title="Processing"
                    items=vec!["YOLOv8 Model", "OpenCV", "Real-time Analysis"]
                />
                <ArchStage
                    title="Detection"
                    items=vec!["PPE Classification", "Violation Detection", "Confidence Scoring"]
                />
                <ArchStage
                    title="Output"
                    items=vec!["Visual Alerts", "Audio Warnings", "Data Logging"]
                />
            </div>
        </div>
    }
}

#[component]
fn ArchStage(title: &'static str, items: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="arch-stage">
            <h4 class="arch-stage-title">{title}</h4>
            <ul class="arch-stage-items">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
