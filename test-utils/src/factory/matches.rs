//! Match factory for creating test match records.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use entity::prelude::MatchStatus;

/// Factory for stored matches.
///
/// Defaults to a scheduled match one day from now.
pub struct MatchFactory {
    model: entity::matches::Model,
}

impl MatchFactory {
    pub fn new() -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            model: entity::matches::Model {
                id: format!("match-{}", id),
                opponent: format!("Opponent {}", id),
                competition: None,
                scheduled_at: now + Duration::days(1),
                status: MatchStatus::Scheduled,
                score: None,
                created_by: "capitaine".to_string(),
                created_at: now,
            },
        }
    }

    pub fn opponent(mut self, opponent: impl Into<String>) -> Self {
        self.model.opponent = opponent.into();
        self
    }

    pub fn status(mut self, status: MatchStatus) -> Self {
        self.model.status = status;
        self
    }

    pub fn build(self) -> entity::matches::Model {
        self.model
    }
}

impl Default for MatchFactory {
    fn default() -> Self {
        Self::new()
    }
}
