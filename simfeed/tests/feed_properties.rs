//! Scenario tests for the demo feed, mirroring how the site drives it:
//! one tick per second while Playing, toggled by the user, dropped on
//! navigation.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simfeed::{DemoFeed, FeedProfile, Playback};

#[test]
fn three_seconds_of_playback_yield_three_distinct_batches() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut feed = DemoFeed::new(FeedProfile::landing());
    feed.start();

    let mut batches = Vec::new();
    for _ in 0..3 {
        feed.tick(&mut rng);
        assert!((25..=34).contains(&feed.stats().fps));
        batches.push(feed.detections().to_vec());
    }

    assert_eq!(feed.ticks(), 3);
    assert_ne!(batches[0], batches[1]);
    assert_ne!(batches[1], batches[2]);

    // alert counter never went backwards
    assert!(feed.stats().alert_count <= 3 * 3);
}

#[test]
fn stopping_mid_sequence_freezes_the_last_batch() {
    let mut rng = StdRng::seed_from_u64(43);
    let mut feed = DemoFeed::new(FeedProfile::interactive());
    feed.start();

    feed.tick(&mut rng);
    feed.tick(&mut rng);
    let on_screen = feed.detections().to_vec();
    let stats = feed.stats();

    feed.stop();
    // a straggler callback after cancellation must not change anything
    feed.tick(&mut rng);

    assert_eq!(feed.detections(), on_screen.as_slice());
    assert_eq!(feed.stats(), stats);
}

#[test]
fn restart_resumes_without_double_counting() {
    let mut rng = StdRng::seed_from_u64(44);
    let mut feed = DemoFeed::new(FeedProfile::landing());

    feed.start();
    feed.tick(&mut rng);
    let after_first = feed.stats().alert_count;

    feed.stop();
    feed.start();
    feed.tick(&mut rng);

    let stats = feed.stats();
    // exactly one batch per delivered tick: the counter grew by this batch's
    // violations and nothing else
    assert_eq!(stats.alert_count, after_first + stats.violations as u64);
    assert_eq!(feed.ticks(), 2);
}

#[test]
fn navigating_away_and_back_resets_state() {
    let mut rng = StdRng::seed_from_u64(45);
    let mut feed = DemoFeed::new(FeedProfile::interactive());
    feed.start();
    feed.tick(&mut rng);
    assert!(!feed.detections().is_empty());

    // navigation drops the view's state object and builds a fresh one
    drop(feed);
    let feed = DemoFeed::new(FeedProfile::interactive());

    assert_eq!(feed.playback(), Playback::Stopped);
    assert!(feed.detections().is_empty());
    assert_eq!(feed.stats().alert_count, 0);
}

#[test]
fn batch_export_round_trips_as_json() {
    let mut rng = StdRng::seed_from_u64(46);
    let mut feed = DemoFeed::new(FeedProfile::interactive());
    feed.start();
    feed.tick(&mut rng);

    let json = serde_json::to_string_pretty(feed.detections()).unwrap();
    let back: Vec<simfeed::Detection> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), feed.detections());
}
