use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use serde_json::Value;

use crate::shared::http::api_error::ApiError;
use crate::shared::infrastructure::event_store::RecordId;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecordEventResponse {
    pub id: RecordId,
}

// The body is decoded by hand so that any JSON document is accepted regardless of Content-Type.
pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecordEventResponse>, ApiError> {
    let payload: Value = serde_json::from_slice(&body)?;
    let id = state.record_handler.handle(payload).await;
    Ok(Json(RecordEventResponse { id }))
}
