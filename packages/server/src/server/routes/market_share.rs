use axum::{extract::Extension, Json};

use crate::domains::market_share::{generate_market_share, load_market_share, DistPayload};
use crate::server::app::AppState;
use crate::server::error::ApiResult;

pub async fn get_market_share_handler(Extension(state): Extension<AppState>) -> Json<DistPayload> {
    Json(load_market_share(&state.deps).await)
}

pub async fn generate_market_share_handler(
    Extension(state): Extension<AppState>,
) -> ApiResult<Json<DistPayload>> {
    Ok(Json(generate_market_share(&state.deps).await?))
}
