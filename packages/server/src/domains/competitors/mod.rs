pub mod actions;

pub use actions::{load_competitor_feed, COMPETITOR_FEED_FILES};
