use thiserror::Error;

use crate::kernel::CompletionError;

/// Failures of the dashboard's domain actions.
///
/// Each variant maps to one HTTP status at the server boundary.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Missing GEMINI_API_KEY. Add it to .env and restart.")]
    MissingApiKey,

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("Model returned an unparseable response.")]
    Unparseable,

    #[error("Failed to save snapshot: {0:#}")]
    Persistence(anyhow::Error),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Failed to fetch any article content.")]
    NoArticleContent,

    #[error("{0}")]
    FeedUnavailable(String),
}
