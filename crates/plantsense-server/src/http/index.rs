//! Index page: the latest reading, or the empty placeholder.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use plantsense_core::error::PlantsenseError;

use crate::app_state::AppState;
use crate::http::error::ApiError;
use crate::templates::IndexTemplate;

pub async fn index(State(state): State<AppState>) -> Result<Response, ApiError> {
    let template = IndexTemplate::new(state.log().latest());
    let html = template
        .render()
        .map_err(|e| PlantsenseError::Internal(format!("template render failed: {e}")))?;
    Ok(Html(html).into_response())
}
