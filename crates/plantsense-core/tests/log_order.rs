//! Reading log ordering and snapshot semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use plantsense_core::{Reading, ReadingLog};
use serde_json::json;

#[test]
fn empty_log() {
    let log = ReadingLog::new();
    assert!(log.is_empty());
    assert!(log.latest().is_none());
    assert!(log.snapshot().is_empty());
}

#[test]
fn append_preserves_insertion_order() {
    let log = ReadingLog::new();
    log.append(json!(1));
    log.append(json!(2));
    log.append(json!("Temperature: 23.50"));

    let entries = log.snapshot();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].value, json!(1));
    assert_eq!(entries[1].value, json!(2));
    assert_eq!(entries[2].value, json!("Temperature: 23.50"));
    assert_eq!(log.latest().unwrap().value, json!("Temperature: 23.50"));
}

#[test]
fn reading_serializes_value_under_data_key() {
    let log = ReadingLog::new();
    let stored = log.append(json!(42));

    let wire = serde_json::to_value(&stored).unwrap();
    assert_eq!(wire["data"], json!(42));
    assert!(wire["timestamp"].is_string());
    assert!(wire.get("value").is_none());
}

#[test]
fn timestamp_round_trips_to_epoch_seconds() {
    let reading = Reading::now(json!(0));
    let epoch = reading.epoch_secs().unwrap();
    let now = chrono::Local::now().timestamp();
    // Formatting truncates sub-second precision.
    assert!((now - epoch).abs() <= 1);
}

#[test]
fn concurrent_appends_are_not_lost() {
    let log = std::sync::Arc::new(ReadingLog::new());
    let mut handles = Vec::new();
    for i in 0..8 {
        let log = log.clone();
        handles.push(std::thread::spawn(move || {
            for j in 0..100 {
                log.append(json!(i * 100 + j));
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(log.len(), 800);
}
