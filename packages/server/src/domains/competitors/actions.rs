//! Competitor feed produced by the external scraper.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::common::DashboardError;
use crate::kernel::ServerDeps;

/// Scraper output, then the bundled sample document.
pub const COMPETITOR_FEED_FILES: [&str; 2] = ["outputData.json", "DummyJson.json"];

async fn read_json(path: &Path) -> Result<Value> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load the first readable feed document and pass it through as-is.
pub async fn load_competitor_feed(deps: &ServerDeps) -> Result<Value, DashboardError> {
    let mut last_error = None;

    for file in COMPETITOR_FEED_FILES {
        let path = deps.data_dir().join(file);
        match read_json(&path).await {
            Ok(document) => {
                debug!(path = %path.display(), "Competitor feed loaded");
                return Ok(document);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Competitor feed unavailable");
                last_error = Some(e);
            }
        }
    }

    let tried = COMPETITOR_FEED_FILES
        .iter()
        .map(|file| deps.data_dir().join(file).display().to_string())
        .collect::<Vec<_>>()
        .join(" or ");
    let mut message = format!("Failed to load data from {tried}");
    if let Some(e) = last_error {
        message.push_str(&format!(": {e:#}"));
    }
    Err(DashboardError::FeedUnavailable(message))
}
