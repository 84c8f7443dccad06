use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::shared::http::api_error::ApiError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = raw_id
        .parse::<i64>()
        .map_err(|source| ApiError::InvalidId {
            raw: raw_id,
            source,
        })?;

    state
        .event_store
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}
