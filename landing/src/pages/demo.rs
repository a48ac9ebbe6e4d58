//! Dedicated demo page: variable batch, configuration surface, live sidebar.
//!
//! The input-source, detection-mode, threshold and alert controls are
//! display-only product mockups; they never filter the generated data.

use std::time::Duration;

use leptos::prelude::*;
use simfeed::{ClassKind, DemoFeed, FeedProfile};

use crate::feed::use_demo_feed;
use crate::sections::{DetectionBoxes, FeedStatus};

#[component]
pub fn DemoPage() -> impl IntoView {
    let (feed, toggle) = use_demo_feed(FeedProfile::interactive());
    let (input_source, set_input_source) = signal("webcam".to_string());
    let (exported, set_exported) = signal(false);

    let export_batch = move |_| {
        if let Some(window) = web_sys::window() {
            let json = feed.with_untracked(|f| {
                serde_json::to_string_pretty(f.detections()).unwrap_or_default()
            });
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(&json);
            set_exported.set(true);
            set_timeout(
                move || set_exported.set(false),
                Duration::from_millis(2000),
            );
        }
    };

    view! {
        <div class="demo-page">
            <div class="container">
                <div class="page-header">
                    <div class="page-header-left">
                        <a href="/" class="back-btn">"Back"</a>
                        <div>
                            <h1 class="page-title">"Live Demo"</h1>
                            <p class="page-subtitle">"Real-time PPE detection system"</p>
                        </div>
                    </div>
                    <div class="page-header-right">
                        <button class="btn btn-secondary" on:click=export_batch>
                            {move || if exported.get() { "Copied" } else { "Export" }}
                        </button>
                    </div>
                </div>

                <div class="demo-page-grid">
                    <div class="demo-page-main">
                        <div class="feed-card">
                            <div class="feed-header">
                                <h2 class="feed-title">"Detection Feed"</h2>
                                <FeedStatus feed=feed />
                            </div>

                            <div class="feed-viewport wide">
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
                                    {move || {
                                        if feed.with(|f| f.is_playing()) { "Pause" } else { "Play" }
                                    }}
                                </button>
                                <select
                                    class="control-select"
                                    prop:value=move || input_source.get()
                                    on:change=move |ev| set_input_source.set(event_target_value(&ev))
                                >
                                    <option value="webcam">"Webcam"</option>
                                    <option value="video">"Video File"</option>
                                    <option value="ip">"IP Camera"</option>
                                </select>
                                <span class="feed-resolution">"Resolution: 1280x720"</span>
                            </div>
                        </div>

                        <DetectionSettings />
                    </div>

                    <div class="demo-page-side">
                        <LiveStats feed=feed />
                        <ClassCounts feed=feed />
                        <SystemInfo feed=feed />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Display-only configuration panel. Nothing here feeds back into the
/// simulation, by specification.
#[component]
fn DetectionSettings() -> impl IntoView {
    let (detection_mode, set_detection_mode) = signal("all".to_string());
    let (threshold, set_threshold) = signal(0.5f32);
    let (audio_alerts, set_audio_alerts) = signal(true);
    let (visual_alerts, set_visual_alerts) = signal(true);

    view! {
        <div class="panel settings-panel">
            <h3 class="panel-title">"Detection Settings"</h3>
            <div class="settings-grid">
                <div class="setting">
                    <label class="setting-label">"Detection Mode"</label>
                    <select
                        class="control-select"
                        prop:value=move || detection_mode.get()
                        on:change=move |ev| set_detection_mode.set(event_target_value(&ev))
                    >
                        <option value="all">"All PPE Items"</option>
                        <option value="violations">"Violations Only"</option>
                        <option value="hardhat">"Hardhat Only"</option>
                        <option value="mask">"Mask Only"</option>
                        <option value="vest">"Safety Vest Only"</option>
                    </select>
                </div>

                <div class="setting">
                    <label class="setting-label">
                        {move || format!("Confidence Threshold: {:.0}%", threshold.get() * 100.0)}
                    </label>
                    <input
                        type="range"
                        class="control-slider"
                        min="0.1"
                        max="1"
                        step="0.05"
                        prop:value=move || threshold.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<f32>() {
                                set_threshold.set(value);
                            }
                        }
                    />
                </div>

                <div class="setting">
                    <label class="setting-label">"Alert Settings"</label>
                    <label class="setting-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || audio_alerts.get()
                            on:change=move |ev| set_audio_alerts.set(event_target_checked(&ev))
                        />
                        <span>"Audio Alerts"</span>
                    </label>
                    <label class="setting-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || visual_alerts.get()
                            on:change=move |ev| set_visual_alerts.set(event_target_checked(&ev))
                        />
                        <span>"Visual Alerts"</span>
                    </label>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LiveStats(feed: ReadSignal<DemoFeed>) -> impl IntoView {
    view! {
        <div class="panel">
            <h3 class="panel-title">"Live Stats"</h3>
            <div class="stat-rows">
                <div class="stat-row">
                    <span class="stat-label">"Total Detections"</span>
                    <span class="stat-value big">{move || feed.with(|f| f.stats().total)}</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"Violations"</span>
                    <span class="stat-value big violation">
                        {move || feed.with(|f| f.stats().violations)}
                    </span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"Compliant"</span>
                    <span class="stat-value big compliant">
                        {move || feed.with(|f| f.stats().compliant)}
                    </span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"FPS"</span>
                    <span class="stat-value big">{move || feed.with(|f| f.stats().fps)}</span>
                </div>
            </div>
        </div>
    }
}

/// Per-class counts of the current batch, over the profile's class pool.
#[component]
fn ClassCounts(feed: ReadSignal<DemoFeed>) -> impl IntoView {
    let classes = feed.with_untracked(|f| f.profile().classes);

    view! {
        <div class="panel">
            <h3 class="panel-title">"Detection Classes"</h3>
            <div class="class-rows">
                {classes
                    .iter()
                    .map(|&class| {
                        let dot = match class.kind() {
                            ClassKind::Compliant => "class-dot compliant",
                            ClassKind::Violation => "class-dot violation",
                            ClassKind::Neutral => "class-dot neutral",
                        };
                        view! {
                            <div class="class-row">
                                <span class=dot></span>
                                <span class="class-name">{class.label()}</span>
                                <span class="class-count">
                                    {move || feed.with(|f| f.class_count(class))}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SystemInfo(feed: ReadSignal<DemoFeed>) -> impl IntoView {
    // one tick per second of playback
    let uptime = move || {
        feed.with(|f| {
            let secs = f.ticks();
            format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
        })
    };

    view! {
        <div class="panel">
            <h3 class="panel-title">"System Info"</h3>
            <div class="stat-rows">
                <div class="stat-row">
                    <span class="stat-label">"Model"</span>
                    <span class="stat-value">"YOLOv8l"</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"GPU"</span>
                    <span class="stat-value compliant">"Available"</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"Memory"</span>
                    <span class="stat-value">"2.1GB"</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">"Uptime"</span>
                    <span class="stat-value">{uptime}</span>
                </div>
            </div>
        </div>
    }
}
