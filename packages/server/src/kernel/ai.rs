//! Gemini adapter for the `BaseAI` trait.

use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiError};
use std::sync::Arc;

use super::BaseAI;

/// Fixed fallback tried after the configured model.
pub const GEMINI_FALLBACK_MODEL: &str = "gemini-2.5-flash";

#[async_trait]
impl BaseAI for GeminiClient {
    async fn generate(&self, model: &str, parts: &[String]) -> Result<String, GeminiError> {
        self.generate_text(model, parts.iter().cloned()).await
    }
}

#[async_trait]
impl BaseAI for Arc<GeminiClient> {
    async fn generate(&self, model: &str, parts: &[String]) -> Result<String, GeminiError> {
        (**self).generate(model, parts).await
    }
}

/// Ordered candidate models: the configured one (if any), then the fallback.
pub fn candidate_models(preferred: Option<&str>) -> Vec<String> {
    let mut models: Vec<String> = preferred
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .into_iter()
        .collect();
    if !models.iter().any(|m| m == GEMINI_FALLBACK_MODEL) {
        models.push(GEMINI_FALLBACK_MODEL.to_string());
    }
    models
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_client_implements_base_ai() {
        fn _assert_base_ai<T: BaseAI>() {}

        _assert_base_ai::<GeminiClient>();
        _assert_base_ai::<Arc<GeminiClient>>();
    }

    #[test]
    fn test_candidate_models() {
        assert_eq!(candidate_models(None), vec![GEMINI_FALLBACK_MODEL]);
        assert_eq!(
            candidate_models(Some("gemini-2.5-pro")),
            vec!["gemini-2.5-pro", GEMINI_FALLBACK_MODEL]
        );
        assert_eq!(
            candidate_models(Some(GEMINI_FALLBACK_MODEL)),
            vec![GEMINI_FALLBACK_MODEL]
        );
        assert_eq!(candidate_models(Some("  ")), vec![GEMINI_FALLBACK_MODEL]);
    }
}
