pub mod actions;
pub mod coalesce;
pub mod models;
pub mod parser;

pub use actions::{generate_retinal_stats, load_retinal_stats, RETINAL_STATS_PROMPT};
pub use coalesce::coalesce_stats;
pub use models::{CompanyRow, StatsPayload, RETINAL_STATS_FILE};
pub use parser::extract_company_rows;
