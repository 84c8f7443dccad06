use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures the inbound HTTP adapters report to clients as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    MalformedBody(#[from] serde_json::Error),

    #[error("invalid event id {raw:?}: {source}")]
    InvalidId {
        raw: String,
        source: std::num::ParseIntError,
    },

    #[error("record doesn't exists")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
