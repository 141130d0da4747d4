use axum::{extract::Extension, Json};

use crate::domains::retinal_stats::{generate_retinal_stats, load_retinal_stats, StatsPayload};
use crate::server::app::AppState;
use crate::server::error::ApiResult;

pub async fn get_retinal_stats_handler(
    Extension(state): Extension<AppState>,
) -> Json<StatsPayload> {
    Json(load_retinal_stats(&state.deps).await)
}

pub async fn generate_retinal_stats_handler(
    Extension(state): Extension<AppState>,
) -> ApiResult<Json<StatsPayload>> {
    Ok(Json(generate_retinal_stats(&state.deps).await?))
}
