//! Shared error type across plantsense crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed submission.
    BadRequest,
    /// Too few stored readings to satisfy the request.
    NotEnoughData,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotEnoughData => "NOT_ENOUGH_DATA",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PlantsenseError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum PlantsenseError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not enough data: {0}")]
    NotEnoughData(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PlantsenseError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PlantsenseError::BadRequest(_) => ClientCode::BadRequest,
            PlantsenseError::NotEnoughData(_) => ClientCode::NotEnoughData,
            PlantsenseError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            PlantsenseError::Internal(_) => ClientCode::Internal,
        }
    }
}
