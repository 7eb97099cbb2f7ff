//! Submission endpoint.
//!
//! The firmware expects `200` + `"Data received"` for every post and has no
//! recovery path for anything else, so the acknowledgment is unconditional.
//! Rejected bodies are logged and counted, never surfaced to the sender.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use plantsense_core::protocol::decode_submission;

use crate::app_state::AppState;

/// Fixed acknowledgment body, kept wire-compatible with the firmware.
pub const SUBMIT_ACK: &str = "Data received";

pub async fn submit(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match decode_submission(&body) {
        Ok(value) => {
            let reading = state.log().append(value);
            state.metrics().submissions.inc(&[("outcome", "accepted")]);
            tracing::info!(timestamp = %reading.timestamp, "reading accepted");

            let len = state.log().len();
            if len == state.cfg().ingest.warn_log_len {
                tracing::warn!(len, "reading log crossed warn_log_len; it grows unbounded for the process lifetime");
            }
        }
        Err(e) => {
            state.metrics().submissions.inc(&[("outcome", "skipped")]);
            tracing::warn!(error = %e, "submission skipped");
        }
    }

    (StatusCode::OK, SUBMIT_ACK)
}
