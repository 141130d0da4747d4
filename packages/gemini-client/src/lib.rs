//! Pure Google Gemini REST API client
//!
//! A small client for the Generative Language API with no domain-specific
//! logic. Supports single-turn `generateContent` calls with text parts.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let response = client
//!     .generate_content("gemini-2.5-flash", GenerateRequest::from_parts(["Hello!"]))
//!     .await?;
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, test servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Generate content.
    ///
    /// Sends the request to `models/{model}:generateContent` and returns the
    /// text of the first candidate (empty when the model produced nothing).
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, model, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<types::ErrorEnvelope>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            warn!(status = %status, error = %message, model, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: types::GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generate content"
        );

        Ok(raw.into_response())
    }

    /// Convenience wrapper: send text parts, get text back.
    pub async fn generate_text<I, S>(&self, model: &str, parts: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generate_content(model, GenerateRequest::from_parts(parts))
            .await
            .map(|r| r.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("test-key").with_base_url("https://custom.api.com/");

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url(), "https://custom.api.com");
    }

    #[test]
    fn test_endpoint_accepts_prefixed_model_names() {
        let client = GeminiClient::new("k");

        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            client.endpoint("models/gemini-2.5-flash"),
            client.endpoint("gemini-2.5-flash")
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = GeminiClient::new("k").with_base_url("http://127.0.0.1:9");
        let err = client
            .generate_text("gemini-2.5-flash", ["hi"])
            .await
            .unwrap_err();

        assert!(matches!(err, GeminiError::Network(_)));
        assert!(!err.is_overloaded());
    }
}
