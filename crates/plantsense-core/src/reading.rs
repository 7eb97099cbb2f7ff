//! The sensor reading entity and its wall-clock timestamp format.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timestamp format used in the log and on the query surface.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One accepted sensor reading.
///
/// `value` is carried verbatim from the submission; on the query surface it
/// is serialized under the `data` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Server-local wall-clock time at ingestion.
    pub timestamp: String,
    /// The submitted value, arbitrary JSON.
    #[serde(rename = "data")]
    pub value: Value,
}

impl Reading {
    /// Build a reading stamped with the current local time.
    pub fn now(value: Value) -> Self {
        Self::at(Local::now(), value)
    }

    /// Build a reading with an explicit timestamp.
    pub fn at(ts: DateTime<Local>, value: Value) -> Self {
        Self {
            timestamp: ts.format(TIMESTAMP_FORMAT).to_string(),
            value,
        }
    }

    /// Parse the stored timestamp back into local epoch seconds.
    ///
    /// Returns `None` for hand-crafted timestamps that do not match
    /// [`TIMESTAMP_FORMAT`], or for the ambiguous instants around a DST
    /// transition.
    pub fn epoch_secs(&self) -> Option<i64> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .ok()
            .and_then(|naive| naive.and_local_timezone(Local).single())
            .map(|dt| dt.timestamp())
    }
}
