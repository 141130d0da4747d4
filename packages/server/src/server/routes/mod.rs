// HTTP routes
pub mod competitors;
pub mod health;
pub mod market_share;
pub mod patents;
pub mod retinal_stats;
pub mod scraper;
pub mod summaries;

pub use competitors::*;
pub use health::*;
pub use market_share::*;
pub use patents::*;
pub use retinal_stats::*;
pub use scraper::*;
pub use summaries::*;
