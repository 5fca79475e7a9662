//! Audit log repository.
//!
//! The log is stored newest first and capped at `MAX_LOG_ENTRIES`; recording
//! beyond the cap drops the oldest entries.
//!
//! Entries are written with `record` from inside the `JsonStore::mutate`
//! closure of the action they describe, so an action and its entry are saved
//! together or not at all.

use chrono::{DateTime, Utc};
use entity::prelude::{Document, LogEntry as LogEntryEntity};

use crate::server::{
    data::store::JsonStore,
    error::AppError,
    model::audit::{CreateLogEntryParam, LogEntry},
};

/// Maximum number of entries kept in the stored log.
pub const MAX_LOG_ENTRIES: usize = 10_000;

/// Inserts `entry` as the newest log entry and enforces the cap.
pub fn prepend(document: &mut Document, entry: LogEntryEntity) {
    tracing::info!(
        "{} by {} ({}) target={}",
        entry.action,
        entry.executor,
        entry.ip,
        entry.target.as_deref().unwrap_or("-")
    );
    document.logs.insert(0, entry);
    document.logs.truncate(MAX_LOG_ENTRIES);
}

/// Records `param` timestamped `now` as the newest entry.
pub fn record(document: &mut Document, param: CreateLogEntryParam, now: DateTime<Utc>) {
    prepend(document, param.into_entity(now));
}

pub struct AuditLogRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the log newest first, truncated to `limit` entries when given.
    pub async fn get_all(&self, limit: Option<usize>) -> Result<Vec<LogEntry>, AppError> {
        self.store
            .read(|document| {
                let limit = limit.unwrap_or(document.logs.len());
                document
                    .logs
                    .iter()
                    .take(limit)
                    .cloned()
                    .map(LogEntry::from_entity)
                    .collect()
            })
            .await
    }
}
