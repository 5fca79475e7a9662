//! Match domain models and parameters.

use chrono::{DateTime, Utc};
use entity::prelude::MatchStatus;

use crate::model::matches::{CreateMatchDto, MatchDto, UpdateMatchDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub opponent: String,
    pub competition: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: MatchStatus,
    pub score: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn from_entity(entity: entity::matches::Model) -> Self {
        Self {
            id: entity.id,
            opponent: entity.opponent,
            competition: entity.competition,
            scheduled_at: entity.scheduled_at,
            status: entity.status,
            score: entity.score,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            opponent: self.opponent,
            competition: self.competition,
            scheduled_at: self.scheduled_at,
            status: self.status,
            score: self.score,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParam {
    pub opponent: String,
    pub competition: Option<String>,
    pub scheduled_at: DateTime<Utc>,
}

impl From<CreateMatchDto> for CreateMatchParam {
    fn from(dto: CreateMatchDto) -> Self {
        Self {
            opponent: dto.opponent.trim().to_string(),
            competition: dto.competition,
            scheduled_at: dto.scheduled_at,
        }
    }
}

/// Partial match update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMatchParam {
    pub opponent: Option<String>,
    pub competition: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub status: Option<MatchStatus>,
    pub score: Option<String>,
}

impl From<UpdateMatchDto> for UpdateMatchParam {
    fn from(dto: UpdateMatchDto) -> Self {
        Self {
            opponent: dto.opponent.map(|opponent| opponent.trim().to_string()),
            competition: dto.competition,
            scheduled_at: dto.scheduled_at,
            status: dto.status,
            score: dto.score,
        }
    }
}
