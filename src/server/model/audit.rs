//! Audit log domain models.

use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

use crate::model::{audit::LogEntryDto, role::Role};

/// Executor name recorded for actions taken by scheduled jobs.
pub const SYSTEM_EXECUTOR: &str = "system";

/// Administrative action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AuditAction {
    Login,
    RoleGrant,
    RoleRevoke,
    OwnerAdd,
    OwnerRemove,
    SanctionIssue,
    SanctionLift,
    SanctionExpire,
    TicketOpen,
    TicketClose,
    MatchCreate,
    MatchUpdate,
    MatchDelete,
    CompositionPublish,
    CommuniquePublish,
    RosterAdd,
    RosterRemove,
    SettingsUpdate,
}

/// Authenticated user performing an operation, as seen by the service layer.
///
/// Carries what services need for secondary rank checks and audit entries
/// without handing them the session.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: String,
    pub username: String,
    pub role: Role,
    /// Whether this identity is the configured super admin.
    pub super_admin: bool,
    /// Client address recorded in audit entries.
    pub ip: String,
}

impl Actor {
    /// Whether the actor may act on something guarded by `role`.
    ///
    /// Requires a strictly higher rank; the super admin bypasses the check.
    pub fn outranks(&self, role: Role) -> bool {
        self.super_admin || self.role.rank() > role.rank()
    }
}

/// Audit log entry as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub action: String,
    pub executor: String,
    pub target: Option<String>,
    pub details: Option<String>,
    pub ip: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn from_entity(entity: entity::log_entry::Model) -> Self {
        Self {
            action: entity.action,
            executor: entity.executor,
            target: entity.target,
            details: entity.details,
            ip: entity.ip,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> LogEntryDto {
        LogEntryDto {
            action: self.action,
            executor: self.executor,
            target: self.target,
            details: self.details,
            ip: self.ip,
            timestamp: self.timestamp,
        }
    }
}

/// Parameters for recording one audit entry.
#[derive(Debug, Clone)]
pub struct CreateLogEntryParam {
    pub action: AuditAction,
    pub executor: String,
    pub target: Option<String>,
    pub details: Option<String>,
    pub ip: String,
}

impl CreateLogEntryParam {
    pub fn new(action: AuditAction, executor: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            action,
            executor: executor.into(),
            target: None,
            details: None,
            ip: ip.into(),
        }
    }

    /// Entry attributed to `actor`.
    pub fn by(actor: &Actor, action: AuditAction) -> Self {
        Self::new(action, &actor.username, &actor.ip)
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn into_entity(self, timestamp: DateTime<Utc>) -> entity::log_entry::Model {
        entity::log_entry::Model {
            action: self.action.to_string(),
            executor: self.executor,
            target: self.target,
            details: self.details,
            ip: self.ip,
            timestamp,
        }
    }
}
