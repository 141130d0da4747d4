use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::kernel::ScraperError;
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperSuccess {
    success: bool,
    message: String,
    output: String,
    stderr: String,
    python_command: String,
}

#[derive(Debug, Serialize)]
pub struct ScraperFailure {
    success: bool,
    message: String,
    error: String,
    details: String,
}

/// Run the external scraper and report its output.
pub async fn scraper_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<ScraperSuccess>, (StatusCode, Json<ScraperFailure>)> {
    match state.deps.scraper_runner.run().await {
        Ok(run) => Ok(Json(ScraperSuccess {
            success: true,
            message: "Scraper completed successfully".to_string(),
            output: run.stdout,
            stderr: run.stderr,
            python_command: run.interpreter,
        })),
        Err(ScraperError::AllCandidatesFailed { tried, last_error }) => {
            tracing::error!(tried = ?tried, error = %last_error, "Scraper failed with every interpreter");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ScraperFailure {
                    success: false,
                    message: "Python not found or scraper failed to run".to_string(),
                    error: last_error,
                    details: format!("Tried paths: {}", tried.join(", ")),
                }),
            ))
        }
    }
}
