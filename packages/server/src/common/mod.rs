// Common types and utilities shared across the application

pub mod companies;
pub mod errors;
pub mod snapshot;
pub mod structured_text;
pub mod utils;

pub use companies::{Roster, MARKET_SHARE_ROSTER, STATS_ROSTER};
pub use errors::DashboardError;
pub use snapshot::SnapshotStore;
pub use structured_text::{first_success, Strategy};
