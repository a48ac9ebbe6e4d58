// Site sections

/// Version string used across the site (single source of truth)
pub const VERSION: &str = "v0.4.1";

mod features;
mod feed_view;
mod footer;
mod hero;
mod live_demo;
mod nav;
mod tech_specs;

pub use features::Features;
pub use feed_view::{DetectionBoxes, FeedStatus};
pub use footer::Footer;
pub use hero::Hero;
pub use live_demo::LiveDemo;
pub use nav::Nav;
pub use tech_specs::TechSpecs;
