// About page - static informational content, no data fetching
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <div class="container">
                <div class="page-header">
                    <div class="page-header-left">
                        <a href="/" class="back-btn">"Back"</a>
                        <div>
                            <h1 class="page-title">"About PPE Detection Kit"</h1>
                            <p class="page-subtitle">"Advanced AI for workplace safety"</p>
                        </div>
                    </div>
                </div>

                <div class="panel mission">
                    <h2 class="panel-title centered">"Our Mission"</h2>
                    <p class="mission-text">
                        "To revolutionize workplace safety in manufacturing environments through "
                        "cutting-edge AI and computer vision technology, ensuring every worker "
                        "returns home safely every day."
                    </p>
                </div>

                <div class="impact-grid">
                    <ImpactCard
                        title="Precision Detection"
                        description="Our YOLOv8-based model achieves 85%+ mAP accuracy in detecting various PPE items and violations."
                        stat="85%+ Accuracy"
                    />
                    <ImpactCard
                        title="Real-world Impact"
                        description="Deployed in manufacturing facilities to protect workers and ensure compliance with safety regulations."
                        stat="1000+ Workers Protected"
                    />
                    <ImpactCard
                        title="Industry Recognition"
                        description="Built with industry-standard technologies and best practices for enterprise-grade reliability."
                        stat="Enterprise Ready"
                    />
                </div>

                <div class="panel">
                    <h2 class="panel-title centered">"Technology Stack"</h2>
                    <div class="stack-grid">
                        <StackColumn
                            category="AI/ML"
                            technologies=vec!["YOLOv8", "PyTorch", "Ultralytics", "OpenCV"]
                        />
                        <StackColumn
                            category="Pipeline"
                            technologies=vec!["Python", "NumPy", "CVZone", "Video Streaming"]
                        />
                        <StackColumn
                            category="Frontend"
                            technologies=vec!["Rust", "Leptos", "WebAssembly", "Trunk"]
                        />
                        <StackColumn
                            category="Infrastructure"
                            technologies=vec!["CUDA", "GPU Acceleration", "Edge Deployment"]
                        />
                    </div>
                </div>

                <div class="panel">
                    <h2 class="panel-title">"Project Overview"</h2>
                    <div class="overview-grid">
                        <div>
                            <h3 class="overview-heading">"Key Features"</h3>
                            <ul class="overview-list">
                                <li>
                                    "Real-time detection of 10+ PPE classes including hardhats, "
                                    "masks, safety vests, and gloves"
                                </li>
                                <li>"Instant audio and visual alerts for safety violations"</li>
                                <li>
                                    "Support for multiple input sources: webcam, IP cameras, "
                                    "and video files"
                                </li>
                                <li>
                                    "Violation image capture and timestamping for compliance records"
                                </li>
                                <li>
                                    "Performance monitoring with real-time FPS and confidence scoring"
                                </li>
                            </ul>
                        </div>
                        <div>
                            <h3 class="overview-heading">"Technical Specifications"</h3>
                            <div class="stat-rows">
                                <div class="stat-row">
                                    <span class="stat-label">"Model Architecture"</span>
                                    <span class="stat-value">"YOLOv8 Large"</span>
                                </div>
                                <div class="stat-row">
                                    <span class="stat-label">"Model Size"</span>
                                    <span class="stat-value">"87.7MB"</span>
                                </div>
                                <div class="stat-row">
                                    <span class="stat-label">"Training Epochs"</span>
                                    <span class="stat-value">"30"</span>
                                </div>
                                <div class="stat-row">
                                    <span class="stat-label">"mAP@0.5"</span>
                                    <span class="stat-value">"85.3%"</span>
                                </div>
                                <div class="stat-row">
                                    <span class="stat-label">"Inference Speed"</span>
                                    <span class="stat-value">"25-35 FPS"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ImpactCard(
    title: &'static str,
    description: &'static str,
    stat: &'static str,
) -> impl IntoView {
    view! {
        <div class="panel impact-card">
            <h3 class="impact-title">{title}</h3>
            <p class="impact-description">{description}</p>
            <div class="impact-stat">{stat}</div>
        </div>
    }
}

#[component]
fn StackColumn(category: &'static str, technologies: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="stack-column">
            <h3 class="stack-category">{category}</h3>
            {technologies
                .into_iter()
                .map(|tech| view! { <div class="stack-chip">{tech}</div> })
                .collect_view()}
        </div>
    }
}
