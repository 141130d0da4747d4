//! HTTP error mapping.
//!
//! Every failed request answers with `{ "error": "<message>" }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::DashboardError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Server is missing required configuration (API key).
    #[error("{0}")]
    Configuration(String),

    /// Completion service produced nothing usable.
    #[error("{0}")]
    Upstream(String),

    /// The service answered with something we could not use.
    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Configuration(_) | ApiError::Upstream(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        let message = err.to_string();
        match err {
            DashboardError::MissingApiKey => ApiError::Configuration(message),
            DashboardError::Completion(_) => ApiError::Upstream(message),
            DashboardError::Unparseable | DashboardError::NoArticleContent => {
                ApiError::BadGateway(message)
            }
            DashboardError::InvalidRequest(_) => ApiError::BadRequest(message),
            DashboardError::Persistence(_) | DashboardError::FeedUnavailable(_) => {
                ApiError::Internal(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
