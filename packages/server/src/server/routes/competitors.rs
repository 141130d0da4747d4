use axum::{extract::Extension, Json};
use serde_json::Value;

use crate::domains::competitors::load_competitor_feed;
use crate::server::app::AppState;
use crate::server::error::ApiResult;

/// Scraped competitor feed, passed through untouched.
pub async fn competitors_handler(Extension(state): Extension<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(load_competitor_feed(&state.deps).await?))
}
