//! HTTP handlers for the public surface.

pub mod error;
pub mod index;
pub mod ingest;
pub mod query;

pub use index::index;
pub use ingest::{submit, SUBMIT_ACK};
pub use query::{data, forecast, ForecastQuery};
