//! # simfeed
//!
//! The simulated detection feed behind the PPE Detection Kit demo site.
//!
//! Nothing here runs a model. Each demo surface on the site owns a
//! [`DemoFeed`], toggles it between Stopped and Playing, and delivers it one
//! tick per second while Playing. Every tick fabricates a fresh batch of
//! [`Detection`] records inside the bounds of a [`FeedProfile`] and wholly
//! replaces the previous batch; display counts are derived from the current
//! batch via [`FeedStats`].
//!
//! Randomness is injected as a [`rand::Rng`] generic, so the state machine is
//! deterministic under test and driven by a `SmallRng` in the WASM frontend.
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use simfeed::{DemoFeed, FeedProfile};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut feed = DemoFeed::new(FeedProfile::landing());
//!
//! feed.start();
//! feed.tick(&mut rng);
//!
//! let stats = feed.stats();
//! assert_eq!(stats.total, 3);
//! assert_eq!(stats.violations + stats.compliant, stats.total);
//! ```

pub mod feed;
pub mod profile;
pub mod types;

pub use feed::{DemoFeed, FeedStats, Playback};
pub use profile::{BatchSize, FeedProfile};
pub use types::{ClassKind, Detection, PpeClass};
