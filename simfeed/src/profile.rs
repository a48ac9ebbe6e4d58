//! Per-call-site generation bounds.
//!
//! The two demo surfaces fabricate their batches differently: the landing
//! section shows a fixed trio of showcase boxes, the dedicated demo page a
//! variable 1-5 records drawn from the wider class pool. Both are captured as
//! a [`FeedProfile`] so the feed state machine itself stays identical.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::{Detection, PpeClass};

/// Batch size bound for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchSize {
    /// Exactly this many records every tick.
    Fixed(usize),
    /// Uniformly drawn from `lo..=hi` each tick, independently.
    Between(usize, usize),
}

impl BatchSize {
    pub fn max(self) -> usize {
        match self {
            BatchSize::Fixed(n) => n,
            BatchSize::Between(_, hi) => hi,
        }
    }
}

/// Generation bounds for one feed instance.
///
/// Every field of a [`Detection`] is an independent uniform draw within these
/// ranges - no correlation between fields, no identity across ticks.
#[derive(Clone, Debug)]
pub struct FeedProfile {
    pub batch: BatchSize,
    /// Class pool, sampled uniformly per record.
    pub classes: &'static [PpeClass],
    pub confidence: RangeInclusive<f32>,
    pub x: RangeInclusive<f32>,
    pub y: RangeInclusive<f32>,
    pub width: RangeInclusive<f32>,
    pub height: RangeInclusive<f32>,
    /// Display-only FPS band, redrawn each tick. Not a measurement.
    pub fps: RangeInclusive<u32>,
    /// Whether violations accumulate into the running alert counter.
    pub accumulate_alerts: bool,
}

impl FeedProfile {
    /// The landing-page showcase: a fixed trio of boxes from the headline
    /// classes, confidence pinned high, alert counter running.
    pub fn landing() -> Self {
        FeedProfile {
            batch: BatchSize::Fixed(3),
            classes: &[PpeClass::Hardhat, PpeClass::NoMask, PpeClass::SafetyVest],
            confidence: 0.85..=0.97,
            x: 50.0..=350.0,
            y: 50.0..=250.0,
            width: 60.0..=110.0,
            height: 50.0..=120.0,
            fps: 25..=34,
            accumulate_alerts: true,
        }
    }

    /// The dedicated demo page: 1-5 records per tick from the wider pool,
    /// the full biased confidence band, no running counter.
    pub fn interactive() -> Self {
        FeedProfile {
            batch: BatchSize::Between(1, 5),
            classes: &[
                PpeClass::Hardhat,
                PpeClass::NoMask,
                PpeClass::SafetyVest,
                PpeClass::NoHardhat,
                PpeClass::Person,
            ],
            confidence: 0.6..=1.0,
            x: 50.0..=450.0,
            y: 50.0..=300.0,
            width: 60.0..=110.0,
            height: 50.0..=90.0,
            fps: 25..=34,
            accumulate_alerts: false,
        }
    }

    /// Fabricate one batch. Ids are batch-local indices.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Detection> {
        let count = match self.batch {
            BatchSize::Fixed(n) => n,
            BatchSize::Between(lo, hi) => rng.gen_range(lo..=hi),
        };

        (0..count)
            .map(|id| Detection {
                id,
                class: self.classes[rng.gen_range(0..self.classes.len())],
                confidence: rng.gen_range(self.confidence.clone()),
                x: rng.gen_range(self.x.clone()),
                y: rng.gen_range(self.y.clone()),
                width: rng.gen_range(self.width.clone()),
                height: rng.gen_range(self.height.clone()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn landing_batches_are_exactly_three() {
        let profile = FeedProfile::landing();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert_eq!(profile.generate(&mut rng).len(), 3);
        }
    }

    #[test]
    fn interactive_batches_stay_within_one_to_five() {
        let profile = FeedProfile::interactive();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let batch = profile.generate(&mut rng);
            assert!((1..=5).contains(&batch.len()));
        }
    }

    #[test]
    fn generated_fields_respect_profile_bounds() {
        let profile = FeedProfile::interactive();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            for det in profile.generate(&mut rng) {
                assert!(profile.confidence.contains(&det.confidence));
                assert!((0.0..=1.0).contains(&det.confidence));
                assert!(profile.x.contains(&det.x));
                assert!(profile.y.contains(&det.y));
                assert!(profile.width.contains(&det.width));
                assert!(profile.height.contains(&det.height));
                assert!(profile.classes.contains(&det.class));
            }
        }
    }

    #[test]
    fn ids_are_batch_local_indices() {
        let profile = FeedProfile::landing();
        let mut rng = StdRng::seed_from_u64(4);
        let batch = profile.generate(&mut rng);
        let ids: Vec<usize> = batch.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
