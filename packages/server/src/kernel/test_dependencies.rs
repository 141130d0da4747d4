// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use gemini_client::GeminiError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseWebScraper};

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a generate call
#[derive(Debug, Clone)]
pub struct GenerateCall {
    pub model: String,
    pub parts: Vec<String>,
}

/// Replays queued replies in order; falls back to a fixed text when empty.
pub struct MockAI {
    responses: Arc<Mutex<Vec<Result<String, GeminiError>>>>,
    calls: Arc<Mutex<Vec<GenerateCall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Add a failure to the queue
    pub fn with_error(self, error: GeminiError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Get all calls made to the AI
    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Models in call order
    pub fn models_called(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.model).collect()
    }

    /// Check if any part containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.parts.iter().any(|p| p.contains(text)))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn generate(&self, model: &str, parts: &[String]) -> Result<String, GeminiError> {
        // Record the call
        self.calls.lock().unwrap().push(GenerateCall {
            model: model.to_string(),
            parts: parts.to_vec(),
        });

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok("Mock AI response".to_string())
        }
    }
}

// =============================================================================
// Mock Web Scraper
// =============================================================================

/// Serves canned pages by URL; unknown URLs fail like a network error.
pub struct MockWebScraper {
    pages: HashMap<String, String>,
    fetch_calls: Arc<Mutex<Vec<String>>>,
}

impl MockWebScraper {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Get all URLs that were fetched
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

impl Default for MockWebScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseWebScraper for MockWebScraper {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.fetch_calls.lock().unwrap().push(url.to_string());

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("connection refused: {}", url))
    }
}
