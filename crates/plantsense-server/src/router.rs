//! Axum router wiring.
//!
//! Maps the HTTP surface onto handlers: ingestion, query, index page,
//! forecast, and the ops endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, http, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().ingest.max_body_bytes;

    Router::new()
        .route("/", get(http::index))
        .route("/submit", post(http::submit))
        .route("/data", get(http::data))
        .route("/forecast", get(http::forecast))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}
