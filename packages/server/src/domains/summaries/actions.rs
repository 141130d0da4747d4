//! Summaries actions - article summarization and the saved-summary store.

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::common::utils::{strip_html, truncate_chars};
use crate::common::{DashboardError, SnapshotStore};
use crate::kernel::{complete_with_overload_retry, ServerDeps, OVERLOAD_RETRY_DELAYS};

use super::condense::condense_bullets;
use super::models::{ArticleSummary, SummariesPayload, SummarizeRequest, SummaryMap, SUMMARIES_FILE};

/// Per-article character cap before the texts are combined.
pub const MAX_ARTICLE_CHARS: usize = 20_000;
pub const ARTICLE_SEPARATOR: &str = "\n\n---\n\n";

pub fn summary_prompt(company_name: &str) -> String {
    format!(
        "\nYou are a concise market analyst. Using ONLY the content below about {company_name}, write a tweet-length update:\n\
         - Output EXACTLY 3 bullet points (or fewer if there is not enough evidence)\n\
         - Total length MUST be ≤ 280 characters (all bullets combined)\n\
         - Each bullet must be short, specific, and supported by the articles\n\
         - No title/preface, no hashtags, no emojis, no links, no filler, no speculation\n"
    )
}

/// Fetch every URL concurrently and return the combined readable text.
///
/// A failed fetch contributes nothing; the result is empty when every fetch
/// failed or every page was blank.
async fn fetch_articles(deps: &ServerDeps, urls: &[String]) -> String {
    let fetches = urls.iter().map(|url| async move {
        match deps.web_scraper.fetch_page(url).await {
            Ok(html) => truncate_chars(&strip_html(&html), MAX_ARTICLE_CHARS).to_string(),
            Err(e) => {
                warn!(url = %url, error = %e, "Article fetch failed");
                String::new()
            }
        }
    });

    join_all(fetches)
        .await
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(ARTICLE_SEPARATOR)
}

/// Summarize a set of articles about one company into at most three bullets.
pub async fn summarize_articles(
    deps: &ServerDeps,
    request: SummarizeRequest,
) -> Result<ArticleSummary, DashboardError> {
    let ai = deps.ai.as_deref().ok_or(DashboardError::MissingApiKey)?;

    let urls = request.urls.unwrap_or_default();
    if urls.is_empty() {
        return Err(DashboardError::InvalidRequest("No URLs provided.".to_string()));
    }

    let combined = fetch_articles(deps, &urls).await;
    if combined.is_empty() {
        return Err(DashboardError::NoArticleContent);
    }
    debug!(urls = urls.len(), chars = combined.len(), "Articles fetched");

    let company = request
        .company_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("the company");
    let parts = [summary_prompt(company), combined];

    let completion =
        complete_with_overload_retry(ai, &deps.candidate_models(), &parts, &OVERLOAD_RETRY_DELAYS)
            .await?;

    info!(model = %completion.model, company, "Articles summarized");
    Ok(ArticleSummary {
        summary: condense_bullets(&completion.text),
        model: completion.model,
    })
}

fn store(deps: &ServerDeps) -> SnapshotStore {
    SnapshotStore::in_dir(deps.data_dir(), SUMMARIES_FILE)
}

/// Saved summaries, or the empty payload when none are stored.
pub async fn load_summaries(deps: &ServerDeps) -> SummariesPayload {
    store(deps)
        .load::<SummariesPayload>()
        .await
        .unwrap_or_else(SummariesPayload::empty)
}

/// Replace the saved summaries wholesale.
pub async fn save_summaries(
    deps: &ServerDeps,
    summaries: SummaryMap,
) -> Result<SummariesPayload, DashboardError> {
    let payload = SummariesPayload {
        summaries,
        updated_at: Some(Utc::now()),
    };

    store(deps)
        .save(&payload)
        .await
        .map_err(DashboardError::Persistence)?;

    info!(companies = payload.summaries.len(), "Saved summaries updated");
    Ok(payload)
}
