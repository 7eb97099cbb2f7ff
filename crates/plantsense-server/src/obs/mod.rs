//! Lightweight in-process metrics.
//!
//! Counters are atomics behind label maps, rendered by the `/metrics`
//! handler in Prometheus text exposition format.

pub mod metrics;

pub use metrics::{CounterVec, ServerMetrics};
