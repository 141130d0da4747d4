//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod article_fetcher;
pub mod completion;
pub mod deps;
pub mod scraper_runner;
pub mod test_dependencies;
pub mod traits;

// Re-export AI client types
pub use gemini_client::{GeminiClient, GeminiError};

pub use ai::{candidate_models, GEMINI_FALLBACK_MODEL};
pub use article_fetcher::{HttpArticleFetcher, ARTICLE_USER_AGENT};
pub use completion::{
    complete_first_available, complete_with_overload_retry, generate_with_retry, Completion,
    CompletionError, OVERLOAD_RETRY_DELAYS,
};
pub use deps::ServerDeps;
pub use scraper_runner::{ScraperError, ScraperRun, ScraperRunner, SCRAPER_SCRIPT};
pub use test_dependencies::{MockAI, MockWebScraper};
pub use traits::*;
