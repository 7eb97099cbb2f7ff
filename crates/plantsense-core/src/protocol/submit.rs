//! Submission body decoding.
//!
//! A submission is a JSON object carrying `send_val`; the value itself is
//! passed through verbatim, including an explicit `null`. Extra keys are
//! tolerated (the firmware occasionally tacks metadata onto the payload).

use serde_json::Value;

use crate::error::{PlantsenseError, Result};

/// Decode a submission body into its reading value.
///
/// Fails when the body is not valid JSON, not an object, or the `send_val`
/// key is absent. Whether a failure is surfaced to the sender is the
/// caller's decision.
pub fn decode_submission(raw: &str) -> Result<Value> {
    let body: Value = serde_json::from_str(raw)
        .map_err(|e| PlantsenseError::BadRequest(format!("invalid submission body: {e}")))?;

    let map = body
        .as_object()
        .ok_or_else(|| PlantsenseError::BadRequest("submission must be a JSON object".into()))?;

    map.get("send_val")
        .cloned()
        .ok_or_else(|| PlantsenseError::BadRequest("missing send_val".into()))
}
