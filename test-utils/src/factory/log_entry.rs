//! Audit entry factory.

use chrono::{DateTime, Duration, Utc};

/// Creates an audit entry with the given action and timestamp.
pub fn entry(action: &str, timestamp: DateTime<Utc>) -> entity::log_entry::Model {
    entity::log_entry::Model {
        action: action.to_string(),
        executor: "tester".to_string(),
        target: None,
        details: None,
        ip: "127.0.0.1".to_string(),
        timestamp,
    }
}

/// Creates `count` entries ordered newest first, one second apart.
///
/// Entry `i` has details `"{i}"`, so index 0 is the newest.
pub fn newest_first(count: usize) -> Vec<entity::log_entry::Model> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let mut log = entry("login", now - Duration::seconds(i as i64));
            log.details = Some(i.to_string());
            log
        })
        .collect()
}
