//! Web interface templates.

use askama::Template;
use serde_json::Value;

use plantsense_core::Reading;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub latest: Option<LatestView>,
}

/// Display fields for the most recent reading.
pub struct LatestView {
    pub timestamp: String,
    pub value: String,
}

impl IndexTemplate {
    /// Precompute display fields from the latest reading, if any.
    pub fn new(latest: Option<Reading>) -> Self {
        Self {
            latest: latest.map(|r| LatestView {
                value: display_value(&r.value),
                timestamp: r.timestamp,
            }),
        }
    }
}

/// Strings render bare; everything else renders as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
