// Business domains
pub mod competitors;
pub mod market_share;
pub mod patents;
pub mod retinal_stats;
pub mod summaries;
