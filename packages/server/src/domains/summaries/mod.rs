pub mod actions;
pub mod condense;
pub mod models;

pub use actions::{load_summaries, save_summaries, summarize_articles, summary_prompt};
pub use condense::{condense_bullets, MAX_SUMMARY_CHARS};
pub use models::{
    parse_summaries_body, ArticleSummary, SummariesPayload, SummarizeRequest, SummaryEntry,
    SummaryMap, SUMMARIES_FILE,
};
