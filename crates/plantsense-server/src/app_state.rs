//! Shared application state for the plantsense server.
//!
//! The reading log lives here and reaches handlers through axum state
//! injection; its lifetime is the server's lifetime. The original deployment
//! kept it as a module-level global mutated from request handlers.

use std::sync::Arc;

use plantsense_core::ReadingLog;

use crate::config::ServerConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    log: ReadingLog,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state around an empty log.
    /// Expects a config that already passed `validate()`.
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                log: ReadingLog::new(),
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn log(&self) -> &ReadingLog {
        &self.inner.log
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }
}
