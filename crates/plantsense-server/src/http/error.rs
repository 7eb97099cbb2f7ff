//! JSON error responses with stable client codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use plantsense_core::error::{ClientCode, PlantsenseError};

/// Maps core errors onto HTTP responses: status from the client code, body
/// `{"code", "msg"}`.
pub struct ApiError(pub PlantsenseError);

impl From<PlantsenseError> for ApiError {
    fn from(e: PlantsenseError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::NotEnoughData => StatusCode::UNPROCESSABLE_ENTITY,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "code": code.as_str(),
            "msg": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
