use axum::{extract::Extension, Json};

use crate::domains::patents::{load_patents, PatentsResponse};
use crate::server::app::AppState;

pub async fn patents_handler(Extension(state): Extension<AppState>) -> Json<PatentsResponse> {
    Json(load_patents(&state.deps).await)
}
