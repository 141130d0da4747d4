//! Server dependencies for route handlers (using traits for testability)
//!
//! This module provides the central dependency container used by all domain actions.
//! External services use trait abstractions to enable testing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::kernel::{candidate_models, BaseAI, BaseWebScraper, ScraperRunner};

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// Directory holding snapshot files and the scraper tool
    pub data_dir: PathBuf,
    /// Completion service; `None` when no API key is configured
    pub ai: Option<Arc<dyn BaseAI>>,
    /// Model named in configuration, tried before the fixed fallback
    pub preferred_model: Option<String>,
    pub web_scraper: Arc<dyn BaseWebScraper>,
    pub scraper_runner: ScraperRunner,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        data_dir: PathBuf,
        ai: Option<Arc<dyn BaseAI>>,
        preferred_model: Option<String>,
        web_scraper: Arc<dyn BaseWebScraper>,
        scraper_runner: ScraperRunner,
    ) -> Self {
        Self {
            data_dir,
            ai,
            preferred_model,
            web_scraper,
            scraper_runner,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Models to try, in order
    pub fn candidate_models(&self) -> Vec<String> {
        candidate_models(self.preferred_model.as_deref())
    }
}
