pub mod actions;
pub mod coalesce;
pub mod models;
pub mod parser;

pub use actions::{generate_market_share, load_market_share, MARKET_SHARE_PROMPT};
pub use coalesce::{coalesce_distribution, renormalize_to_100};
pub use models::{DistItem, DistPayload, MARKET_SHARE_FILE};
pub use parser::extract_shares;
