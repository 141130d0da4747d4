//! HTTP fetcher for news article pages.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::BaseWebScraper;

/// Some news sites reject requests without an identifying agent.
pub const ARTICLE_USER_AGENT: &str = "EyeOnRivalsBot/1.0 (+https://example.com)";

/// Plain reqwest fetcher (no JavaScript rendering).
pub struct HttpArticleFetcher {
    client: reqwest::Client,
}

impl HttpArticleFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(ARTICLE_USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BaseWebScraper for HttpArticleFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        debug!(url, status = %status, "Fetched article");

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
