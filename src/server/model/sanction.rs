//! Sanction domain models and parameters.

use chrono::{DateTime, Duration, Utc};
use entity::prelude::SanctionKind;

use crate::{
    model::sanction::{IssueSanctionDto, SanctionDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Sanction {
    pub id: String,
    pub user_id: String,
    pub kind: SanctionKind,
    pub reason: String,
    pub issued_by: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Sanction {
    pub fn from_entity(entity: entity::sanction::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            reason: entity.reason,
            issued_by: entity.issued_by,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> SanctionDto {
        SanctionDto {
            id: self.id,
            user_id: self.user_id,
            kind: self.kind,
            reason: self.reason,
            issued_by: self.issued_by,
            created_at: self.created_at,
            expires_at: self.expires_at,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssueSanctionParam {
    pub user_id: String,
    pub kind: SanctionKind,
    pub reason: String,
    pub duration_minutes: Option<i64>,
}

impl IssueSanctionParam {
    /// Expiry of a sanction issued at `now`.
    ///
    /// Only suspensions expire; `duration_minutes` is ignored for other kinds.
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Suspension with a duration
    /// - `Ok(None)` - Permanent sanction
    /// - `Err(AppError::BadRequest)` - Duration does not fit the calendar
    pub fn expires_at(&self, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>, AppError> {
        if self.kind != SanctionKind::Suspension {
            return Ok(None);
        }
        let Some(minutes) = self.duration_minutes else {
            return Ok(None);
        };

        Duration::try_minutes(minutes)
            .and_then(|duration| now.checked_add_signed(duration))
            .map(Some)
            .ok_or_else(|| AppError::BadRequest("Duration too large".to_string()))
    }
}

impl From<IssueSanctionDto> for IssueSanctionParam {
    fn from(dto: IssueSanctionDto) -> Self {
        Self {
            user_id: dto.user_id,
            kind: dto.kind,
            reason: dto.reason.trim().to_string(),
            duration_minutes: dto.duration_minutes,
        }
    }
}
