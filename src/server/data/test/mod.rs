use crate::server::model::audit::{AuditAction, CreateLogEntryParam};

mod matches;
mod user;

/// Audit entry passed to repository mutations that are not about the log.
fn entry<T>(_: &T) -> CreateLogEntryParam {
    CreateLogEntryParam::new(AuditAction::Login, "tester", "127.0.0.1")
}
