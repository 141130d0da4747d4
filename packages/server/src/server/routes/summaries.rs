use axum::{body::Bytes, extract::Extension, Json};

use crate::domains::summaries::{
    load_summaries, parse_summaries_body, save_summaries, summarize_articles, ArticleSummary,
    SummariesPayload, SummarizeRequest,
};
use crate::server::app::AppState;
use crate::server::error::ApiResult;

/// Summarize news articles for one company.
///
/// The body is read raw so a malformed request degrades to "No URLs
/// provided." instead of a framework rejection.
pub async fn summarize_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> ApiResult<Json<ArticleSummary>> {
    let request = SummarizeRequest::from_body(&body);
    Ok(Json(summarize_articles(&state.deps, request).await?))
}

pub async fn get_summaries_handler(
    Extension(state): Extension<AppState>,
) -> Json<SummariesPayload> {
    Json(load_summaries(&state.deps).await)
}

pub async fn save_summaries_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> ApiResult<Json<SummariesPayload>> {
    let summaries = parse_summaries_body(&body)?;
    Ok(Json(save_summaries(&state.deps, summaries).await?))
}
