use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::record_event::inbound::http as record_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", post(record_http::handle))
        .route("/events/{id}", get(get_http::handle))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
