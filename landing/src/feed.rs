//! Playback controller: owns the repeating timer for one feed instance.
//!
//! The feed state itself lives in `simfeed`; this module is the glue between
//! the Playing flag and the browser's interval scheduler. The flag is the
//! single trigger: whenever it flips, the effect below tears down any pending
//! interval before scheduling a new one, so at most one timer is ever active
//! per instance, and `on_cleanup` cancels it when the owning view unmounts.

use std::time::Duration;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use simfeed::{DemoFeed, FeedProfile};

/// One simulation tick per second, matching the fabricated "real-time" feel.
pub const TICK: Duration = Duration::from_millis(1000);

/// Create a feed instance scoped to the calling view.
///
/// Returns the feed signal and a toggle for the play/pause control. The
/// interval lifecycle is fully owned here; callers only read state and
/// toggle playback.
pub fn use_demo_feed(profile: FeedProfile) -> (ReadSignal<DemoFeed>, impl Fn() + Copy) {
    let (feed, set_feed) = signal(DemoFeed::new(profile));
    let rng = StoredValue::new_local(SmallRng::seed_from_u64(js_sys::Date::now() as u64));
    let interval = StoredValue::new_local(None::<IntervalHandle>);

    // Memoized so ticks (which rewrite the feed every second) don't retrigger
    // the scheduling effect; only actual Stopped<->Playing flips do.
    let playing = Memo::new(move |_| feed.with(|f| f.is_playing()));

    Effect::new(move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
            interval.set_value(None);
        }
        if playing.get() {
            let scheduled = set_interval_with_handle(
                move || rng.update_value(|rng| set_feed.update(|feed| feed.tick(rng))),
                TICK,
            );
            if let Ok(handle) = scheduled {
                interval.set_value(Some(handle));
            }
        }
    });

    on_cleanup(move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
    });

    let toggle = move || set_feed.update(|feed| feed.toggle());
    (feed, toggle)
}
