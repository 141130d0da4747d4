// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (prompts, parsing, coalescing) lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseWebScraper)

use anyhow::Result;
use async_trait::async_trait;
use gemini_client::GeminiError;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Send text parts to `model` as a single user turn and return the raw
    /// text reply (possibly empty).
    ///
    /// Errors keep the provider's classification so callers can decide
    /// whether to retry (`is_overloaded`) or move to another model
    /// (`is_model_unavailable`).
    async fn generate(&self, model: &str, parts: &[String]) -> Result<String, GeminiError>;
}

// =============================================================================
// Web Scraper Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseWebScraper: Send + Sync {
    /// Fetch a page and return its raw body (HTML)
    async fn fetch_page(&self, url: &str) -> Result<String>;
}
