//! Query and forecast endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use plantsense_core::error::PlantsenseError;
use plantsense_core::forecast::{fit, predict_at, Sample};
use plantsense_core::Reading;

use crate::app_state::AppState;
use crate::http::error::ApiError;

/// Full reading log in insertion order.
pub async fn data(State(state): State<AppState>) -> Json<Vec<Reading>> {
    Json(state.log().snapshot())
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastQuery {
    pub horizon_secs: Option<u64>,
    pub degree: Option<usize>,
}

/// Predict the value `horizon_secs` ahead by a polynomial fit over the
/// numeric readings in the log. Non-numeric readings are skipped.
pub async fn forecast(
    State(state): State<AppState>,
    Query(q): Query<ForecastQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let cfg = &state.cfg().forecast;
    let horizon_secs = q.horizon_secs.unwrap_or(cfg.default_horizon_secs);
    let degree = q.degree.unwrap_or(1);

    if degree == 0 || degree > cfg.max_degree {
        state.metrics().forecast_requests.inc(&[("outcome", "rejected")]);
        return Err(PlantsenseError::BadRequest(format!(
            "degree must be between 1 and {}",
            cfg.max_degree
        ))
        .into());
    }

    let entries = state.log().snapshot();
    let (origin, samples) = numeric_samples(&entries);

    match fit(&samples, degree) {
        Ok(coeffs) => {
            // fit succeeded, so at least one sample exists and origin is set
            let origin = origin.unwrap_or(0);
            let now = chrono::Local::now().timestamp();
            let target = (now - origin) as f64 + horizon_secs as f64;
            let predicted = predict_at(&coeffs, target);

            state.metrics().forecast_requests.inc(&[("outcome", "ok")]);
            Ok(Json(json!({
                "predicted": predicted,
                "horizon_secs": horizon_secs,
                "degree": degree,
                "samples": samples.len(),
            })))
        }
        Err(e) => {
            state.metrics().forecast_requests.inc(&[("outcome", "rejected")]);
            Err(e.into())
        }
    }
}

/// Extract `(epoch of first numeric reading, samples relative to it)`.
fn numeric_samples(entries: &[Reading]) -> (Option<i64>, Vec<Sample>) {
    let mut origin = None;
    let mut samples = Vec::new();
    for r in entries {
        let (Some(epoch), Some(value)) = (r.epoch_secs(), r.value.as_f64()) else {
            continue;
        };
        let origin_secs = *origin.get_or_insert(epoch);
        samples.push(Sample {
            t: (epoch - origin_secs) as f64,
            value,
        });
    }
    (origin, samples)
}
