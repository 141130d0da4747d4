//! Error types for Gemini client.

use thiserror::Error;

/// Result type for Gemini client operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Gemini client errors.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, unknown model)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeminiError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GeminiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Transient capacity failure ("model is overloaded", 503).
    pub fn is_overloaded(&self) -> bool {
        if self.status() == Some(503) {
            return true;
        }
        let msg = self.to_string().to_lowercase();
        msg.contains("overloaded") || msg.contains("service unavailable")
    }

    /// The requested model does not exist or cannot serve `generateContent`.
    pub fn is_model_unavailable(&self) -> bool {
        if self.status() == Some(404) {
            return true;
        }
        let msg = self.to_string().to_lowercase();
        msg.contains("not found") || msg.contains("unsupported") || msg.contains("listmodels")
    }
}
