//! Audit log service.
//!
//! Read side only. Entries are recorded by the repositories in the same store
//! cycle as the action they describe.

use crate::server::{
    data::{audit_log::AuditLogRepository, store::JsonStore},
    error::AppError,
    model::audit::LogEntry,
};

pub struct AuditService<'a> {
    store: &'a JsonStore,
}

impl<'a> AuditService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the log newest first, optionally truncated to `limit` entries.
    pub async fn get_logs(&self, limit: Option<usize>) -> Result<Vec<LogEntry>, AppError> {
        AuditLogRepository::new(self.store).get_all(limit).await
    }
}
