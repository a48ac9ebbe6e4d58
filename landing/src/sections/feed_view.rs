//! Presentation pieces shared by both feed instances.
//!
//! Purely derived rendering: everything here is a function of the feed
//! signal, no logic of its own.

use leptos::prelude::*;
use simfeed::DemoFeed;

/// Bounding-box overlay for the current batch, color-coded by violation flag.
///
/// The batch is rendered whether or not playback is running, so the last
/// frame persists on screen after a pause.
#[component]
pub fn DetectionBoxes(feed: ReadSignal<DemoFeed>) -> impl IntoView {
    view! {
        {move || {
            feed.with(|f| {
                f.detections()
                    .iter()
                    .map(|det| {
                        let box_class = if det.is_violation() {
                            "detection-box violation"
                        } else {
                            "detection-box compliant"
                        };
                        let style = format!(
                            "left: {:.0}px; top: {:.0}px; width: {:.0}px; height: {:.0}px;",
                            det.x, det.y, det.width, det.height
                        );
                        let label = format!("{} {}%", det.class.label(), det.confidence_pct());
                        view! {
                            <div class=box_class style=style>
                                <span class="detection-label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            })
        }}
    }
}

/// Live/Stopped pill plus the fps readout shown in each feed header.
#[component]
pub fn FeedStatus(feed: ReadSignal<DemoFeed>) -> impl IntoView {
    view! {
        <div class="feed-status">
            <span class=move || {
                if feed.with(|f| f.is_playing()) { "status-dot live" } else { "status-dot" }
            }></span>
            <span class="status-text">
                {move || if feed.with(|f| f.is_playing()) { "Live" } else { "Stopped" }}
            </span>
            <span class="status-fps">
                {move || format!("FPS: {}", feed.with(|f| f.stats().fps))}
            </span>
        </div>
    }
}
