//! Roster domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::roster::{AddPlayerDto, PlayerDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub pseudo: String,
    pub position: String,
    pub discord_id: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            pseudo: entity.pseudo,
            position: entity.position,
            discord_id: entity.discord_id,
            joined_at: entity.joined_at,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            pseudo: self.pseudo,
            position: self.position,
            discord_id: self.discord_id,
            joined_at: self.joined_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddPlayerParam {
    pub pseudo: String,
    pub position: String,
    pub discord_id: Option<String>,
}

impl From<AddPlayerDto> for AddPlayerParam {
    fn from(dto: AddPlayerDto) -> Self {
        Self {
            pseudo: dto.pseudo.trim().to_string(),
            position: dto.position.trim().to_string(),
            discord_id: dto.discord_id,
        }
    }
}
