//! plantsense core: domain types, submission decoding, and the reading log.
//!
//! This crate defines the storage-level contracts and error surface shared by
//! the server and tooling. It intentionally carries no transport or runtime
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PlantsenseError`/`Result` so the
//! server does not crash on malformed submissions.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod forecast;
pub mod log;
pub mod protocol;
pub mod reading;

/// Shared result type.
pub use error::{PlantsenseError, Result};
pub use log::ReadingLog;
pub use reading::Reading;
