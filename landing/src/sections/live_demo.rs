//! The landing-page demo instance: fixed trio of showcase boxes, running
//! alert counter.

use leptos::prelude::*;
use simfeed::{DemoFeed, FeedProfile};

use super::feed_view::{DetectionBoxes, FeedStatus};
use crate::feed::use_demo_feed;

#[component]
pub fn LiveDemo() -> impl IntoView {
    let (feed, toggle) = use_demo_feed(FeedProfile::landing());

    view! {
        <section id="demo" class="live-demo">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Live Detection "
                        <span class="accent">"Demonstration"</span>
                    </h2>
                    <p class="section-description">
                        "Experience real-time PPE detection in action. Click play to start the simulation."
                    </p>
                </div>

                <div class="demo-grid">
                    <div class="demo-main">
                        <div class="feed-card">
                            <div class="feed-header">
                                <h3 class="feed-title">"Detection Feed"</h3>
                                <FeedStatus feed=feed />
                            </div>

                            <div class="feed-viewport">
                                <Show when=move || feed.with(|f| f.is_playing())>
                                    <div class="scan-line"></div>
                                </Show>
                                <DetectionBoxes feed=feed />
                                <Show when=move || !feed.with(|f| f.is_playing())>
                                    <div class="feed-overlay">
                                        <button class="play-btn-large" on:click=move |_| toggle()>
                                            "Play"
                                        </button>
                                    </div>
                                </Show>
                            </div>

                            <div class="feed-controls">
                                <button class="btn btn-primary" on:click=move |_| toggle()>
                                    {move || if feed.with(|f| f.is_playing()) { "Pause" } else { "Play" }}
                                </button>
                                <span class="feed-source">"Webcam"</span>
                                <span class="feed-resolution">"Resolution: 1280x720"</span>
                            </div>
                        </div>
                    </div>

                    <div class="demo-side">
                        <StatsPanel feed=feed />
                        <RecentAlerts feed=feed />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsPanel(feed: ReadSignal<DemoFeed>) -> impl IntoView {
    view! {
        <div class="panel">
            <h4 class="panel-title">"Detection Stats"</h4>
            <div class="stat-rows">
                <div class="stat-row">
                    <span class="stat-label">"Total Detections"</span>
                    <span class="stat-value">{move || feed.with(|f| f.stats().total)}</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"Violations"</span>
                    <span class="stat-value violation">
                        {move || feed.with(|f| f.stats().violations)}
                    </span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"Compliant"</span>
                    <span class="stat-value compliant">
                        {move || feed.with(|f| f.stats().compliant)}
                    </span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"Alert Count"</span>
                    <span class="stat-value alert">
                        {move || feed.with(|f| f.stats().alert_count)}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Violations first, then compliant records, capped at the five most recent
/// entries like the real pipeline's violation gallery.
#[component]
fn RecentAlerts(feed: ReadSignal<DemoFeed>) -> impl IntoView {
    view! {
        <div class="panel">
            <h4 class="panel-title">"Recent Alerts"</h4>
            <div class="alert-list">
                {move || {
                    feed.with(|f| {
                        let violations = f.detections().iter().filter(|d| d.is_violation());
                        let compliant = f.detections().iter().filter(|d| !d.is_violation());
                        violations
                            .chain(compliant)
                            .take(5)
                            .map(|det| {
                                let row_class = if det.is_violation() {
                                    "alert-row violation"
                                } else {
                                    "alert-row compliant"
                                };
                                let marker = if det.is_violation() { "!" } else { "ok" };
                                let conf = format!("Confidence: {}%", det.confidence_pct());
                                view! {
                                    <div class=row_class>
                                        <span class="alert-marker">{marker}</span>
                                        <div class="alert-body">
                                            <p class="alert-type">{det.class.label()}</p>
                                            <p class="alert-confidence">{conf}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
                <Show when=move || feed.with(|f| f.detections().is_empty())>
                    <p class="alert-empty">"No detections yet. Start the demo to see alerts."</p>
                </Show>
            </div>
        </div>
    }
}
