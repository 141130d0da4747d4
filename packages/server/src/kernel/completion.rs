//! Text acquisition from the completion service.
//!
//! Two policies are used by the routes:
//! - `complete_first_available`: walk the candidate models once, first
//!   non-empty reply wins (market share, retinal stats).
//! - `complete_with_overload_retry`: per model, retry only "overloaded"
//!   failures on a fixed schedule; move to the next model only when the
//!   model itself is unavailable (article summaries).

use gemini_client::GeminiError;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::BaseAI;

/// Backoff schedule for overloaded responses.
pub const OVERLOAD_RETRY_DELAYS: [Duration; 3] = [
    Duration::from_millis(500),
    Duration::from_millis(1000),
    Duration::from_millis(2000),
];

/// Text produced by a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub model: String,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Every candidate was tried; carries the last error seen, if any.
    #[error("{}", .last_error.as_ref().map(|e| e.to_string()).unwrap_or_else(|| "Model failed to return a response.".to_string()))]
    NoOutput { last_error: Option<GeminiError> },

    /// A non-retryable error from the service.
    #[error(transparent)]
    Upstream(GeminiError),
}

/// Try each model in order until one returns non-empty text.
pub async fn complete_first_available(
    ai: &dyn BaseAI,
    models: &[String],
    parts: &[String],
) -> Result<Completion, CompletionError> {
    let mut last_error = None;

    for model in models {
        match ai.generate(model, parts).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(model = %model, chars = text.len(), "Model returned text");
                return Ok(Completion {
                    text,
                    model: model.clone(),
                });
            }
            Ok(_) => debug!(model = %model, "Model returned empty text, trying next"),
            Err(e) => {
                warn!(model = %model, error = %e, "Model failed, trying next");
                last_error = Some(e);
            }
        }
    }

    Err(CompletionError::NoOutput { last_error })
}

/// Call one model, retrying overloaded failures on `delays`.
pub async fn generate_with_retry(
    ai: &dyn BaseAI,
    model: &str,
    parts: &[String],
    delays: &[Duration],
) -> Result<String, GeminiError> {
    let mut last_error = None;

    for (attempt, delay) in delays.iter().enumerate() {
        match ai.generate(model, parts).await {
            Ok(text) => return Ok(text),
            Err(e) if e.is_overloaded() => {
                warn!(model, attempt = attempt + 1, delay_ms = delay.as_millis() as u64, error = %e, "Model overloaded, backing off");
                last_error = Some(e);
                tokio::time::sleep(*delay).await;
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or_else(|| GeminiError::Api {
        status: 503,
        message: "Model overloaded; retries exhausted".to_string(),
    }))
}

/// Walk the candidate models with overload retries. Unavailable models are
/// skipped; any other failure is returned immediately.
pub async fn complete_with_overload_retry(
    ai: &dyn BaseAI,
    models: &[String],
    parts: &[String],
    delays: &[Duration],
) -> Result<Completion, CompletionError> {
    let mut last_error = None;

    for model in models {
        match generate_with_retry(ai, model, parts, delays).await {
            Ok(text) => {
                return Ok(Completion {
                    text,
                    model: model.clone(),
                })
            }
            Err(e) if e.is_model_unavailable() => {
                warn!(model = %model, error = %e, "Model unavailable, trying next");
                last_error = Some(e);
            }
            Err(e) => return Err(CompletionError::Upstream(e)),
        }
    }

    Err(CompletionError::NoOutput { last_error })
}
