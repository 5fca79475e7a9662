//! Club settings domain model.

use chrono::{DateTime, Utc};

use crate::model::settings::{SettingsDto, UpdateSettingsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub club_name: String,
    pub club_tag: String,
    pub recruitment_open: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Settings {
    pub fn from_entity(entity: entity::settings::Model) -> Self {
        Self {
            club_name: entity.club_name,
            club_tag: entity.club_tag,
            recruitment_open: entity.recruitment_open,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SettingsDto {
        SettingsDto {
            club_name: self.club_name,
            club_tag: self.club_tag,
            recruitment_open: self.recruitment_open,
            updated_at: self.updated_at,
        }
    }
}

/// Partial settings update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsParam {
    pub club_name: Option<String>,
    pub club_tag: Option<String>,
    pub recruitment_open: Option<bool>,
}

impl From<UpdateSettingsDto> for UpdateSettingsParam {
    fn from(dto: UpdateSettingsDto) -> Self {
        Self {
            club_name: dto.club_name.map(|name| name.trim().to_string()),
            club_tag: dto.club_tag.map(|tag| tag.trim().to_string()),
            recruitment_open: dto.recruitment_open,
        }
    }
}
