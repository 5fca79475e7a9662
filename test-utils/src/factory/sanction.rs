//! Sanction factory for creating test sanction records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::prelude::SanctionKind;

/// Factory for stored sanctions.
///
/// Defaults to an active indefinite suspension issued by `"moderator"`.
pub struct SanctionFactory {
    model: entity::sanction::Model,
}

impl SanctionFactory {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            model: entity::sanction::Model {
                id: format!("sanction-{}", next_id()),
                user_id: user_id.into(),
                kind: SanctionKind::Suspension,
                reason: "Test sanction".to_string(),
                issued_by: "moderator".to_string(),
                created_at: Utc::now(),
                expires_at: None,
                active: true,
            },
        }
    }

    pub fn kind(mut self, kind: SanctionKind) -> Self {
        self.model.kind = kind;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.model.expires_at = Some(expires_at);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.model.active = active;
        self
    }

    pub fn build(self) -> entity::sanction::Model {
        self.model
    }
}
