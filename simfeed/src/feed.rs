//! The playback/tick state machine behind each demo surface.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::profile::FeedProfile;
use crate::types::{Detection, PpeClass};

/// Playback state of a feed instance. Initial state is Stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    #[default]
    Stopped,
    Playing,
}

/// Display-ready counts derived from the current batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub total: usize,
    pub violations: usize,
    pub compliant: usize,
    /// Display-only band value, redrawn each tick. 0 before the first tick.
    pub fps: u32,
    /// Running total of violations seen since this feed was created.
    /// Stays 0 for profiles that do not accumulate.
    pub alert_count: u64,
}

/// One demo surface's owned state: playback flag, current batch, counters.
///
/// The feed never schedules anything itself. The owning view delivers ticks
/// while Playing; a tick wholly replaces the previous batch (no merging, no
/// identity across ticks). A tick delivered while Stopped is a no-op, so a
/// straggler timer callback can never mutate discarded state.
#[derive(Clone, Debug)]
pub struct DemoFeed {
    profile: FeedProfile,
    playback: Playback,
    detections: Vec<Detection>,
    fps: u32,
    alert_count: u64,
    ticks: u64,
}

impl DemoFeed {
    /// A fresh feed: Stopped, empty batch, zeroed counters.
    pub fn new(profile: FeedProfile) -> Self {
        DemoFeed {
            profile,
            playback: Playback::Stopped,
            detections: Vec::new(),
            fps: 0,
            alert_count: 0,
            ticks: 0,
        }
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    pub fn start(&mut self) {
        self.playback = Playback::Playing;
    }

    /// Stop playback. The last batch stays on screen; counters are kept.
    pub fn stop(&mut self) {
        self.playback = Playback::Stopped;
    }

    pub fn toggle(&mut self) {
        self.playback = match self.playback {
            Playback::Stopped => Playback::Playing,
            Playback::Playing => Playback::Stopped,
        };
    }

    /// One simulation tick. Replaces the batch, redraws the display fps and,
    /// for accumulating profiles, adds this batch's violations to the running
    /// alert counter. No-op unless Playing.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if !self.is_playing() {
            return;
        }

        self.detections = self.profile.generate(rng);
        self.fps = rng.gen_range(self.profile.fps.clone());
        self.ticks += 1;

        if self.profile.accumulate_alerts {
            let violations = self.detections.iter().filter(|d| d.is_violation()).count();
            self.alert_count += violations as u64;
        }
    }

    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    pub fn profile(&self) -> &FeedProfile {
        &self.profile
    }

    /// Ticks delivered since creation. One tick per second of playback, which
    /// is what the demo page's uptime readout renders.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How many records in the current batch carry the given class.
    pub fn class_count(&self, class: PpeClass) -> usize {
        self.detections.iter().filter(|d| d.class == class).count()
    }

    pub fn stats(&self) -> FeedStats {
        let violations = self.detections.iter().filter(|d| d.is_violation()).count();
        FeedStats {
            total: self.detections.len(),
            violations,
            compliant: self.detections.len() - violations,
            fps: self.fps,
            alert_count: self.alert_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BatchSize, FeedProfile};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playing(profile: FeedProfile) -> DemoFeed {
        let mut feed = DemoFeed::new(profile);
        feed.start();
        feed
    }

    #[test]
    fn fresh_feed_is_stopped_and_empty() {
        let feed = DemoFeed::new(FeedProfile::landing());
        assert_eq!(feed.playback(), Playback::Stopped);
        assert_eq!(feed.detections().len(), 0);
        assert_eq!(feed.stats(), FeedStats::default());
    }

    #[test]
    fn toggle_flips_between_the_two_states() {
        let mut feed = DemoFeed::new(FeedProfile::landing());
        feed.toggle();
        assert!(feed.is_playing());
        feed.toggle();
        assert!(!feed.is_playing());
    }

    #[test]
    fn tick_while_stopped_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut feed = DemoFeed::new(FeedProfile::landing());
        feed.tick(&mut rng);
        assert_eq!(feed.detections().len(), 0);
        assert_eq!(feed.ticks(), 0);
        assert_eq!(feed.stats().fps, 0);
    }

    #[test]
    fn tick_replaces_the_batch_wholesale() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut feed = playing(FeedProfile::interactive());

        feed.tick(&mut rng);
        let first = feed.detections().to_vec();
        feed.tick(&mut rng);
        let second = feed.detections().to_vec();

        assert_ne!(first, second);
        assert!(second.len() <= feed.profile().batch.max());
    }

    #[test]
    fn stats_partition_the_batch() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut feed = playing(FeedProfile::interactive());
        for _ in 0..50 {
            feed.tick(&mut rng);
            let stats = feed.stats();
            assert_eq!(stats.violations + stats.compliant, stats.total);
            assert_eq!(stats.total, feed.detections().len());
        }
    }

    #[test]
    fn fps_stays_inside_the_band() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut feed = playing(FeedProfile::landing());
        for _ in 0..50 {
            feed.tick(&mut rng);
            assert!((25..=34).contains(&feed.stats().fps));
        }
    }

    #[test]
    fn alert_count_accumulates_exactly_the_batch_violations() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut feed = playing(FeedProfile::landing());

        let mut expected = 0u64;
        for _ in 0..50 {
            let before = feed.stats().alert_count;
            feed.tick(&mut rng);
            let stats = feed.stats();
            expected += stats.violations as u64;
            assert_eq!(stats.alert_count, expected);
            assert!(stats.alert_count >= before);
        }
    }

    #[test]
    fn interactive_profile_never_accumulates_alerts() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut feed = playing(FeedProfile::interactive());
        for _ in 0..50 {
            feed.tick(&mut rng);
            assert_eq!(feed.stats().alert_count, 0);
        }
    }

    #[test]
    fn class_counts_sum_to_total() {
        let mut rng = StdRng::seed_from_u64(16);
        let mut feed = playing(FeedProfile::interactive());
        feed.tick(&mut rng);

        let by_class: usize = feed
            .profile()
            .classes
            .iter()
            .map(|&c| feed.class_count(c))
            .sum();
        assert_eq!(by_class, feed.stats().total);
    }

    #[test]
    fn fixed_batch_size_holds_for_custom_profiles() {
        let profile = FeedProfile {
            batch: BatchSize::Fixed(1),
            ..FeedProfile::landing()
        };
        let mut rng = StdRng::seed_from_u64(17);
        let mut feed = playing(profile);
        feed.tick(&mut rng);
        assert_eq!(feed.detections().len(), 1);
    }
}
