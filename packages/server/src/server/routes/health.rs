use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    data_dir: String,
    data_dir_exists: bool,
    ai_configured: bool,
}

/// Health check endpoint
///
/// Always 200; reports whether the data directory is present and whether a
/// completion API key is configured.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let data_dir = state.deps.data_dir();
    let data_dir_exists = tokio::fs::metadata(data_dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    Json(HealthResponse {
        status: "healthy".to_string(),
        data_dir: data_dir.display().to_string(),
        data_dir_exists,
        ai_configured: state.deps.ai.is_some(),
    })
}
