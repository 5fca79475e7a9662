//! Composition domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::composition::{CompositionDto, CreateCompositionDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub id: String,
    pub match_id: Option<String>,
    pub match_label: String,
    pub players: Vec<String>,
    pub substitutes: Vec<String>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Composition {
    pub fn from_entity(entity: entity::composition::Model) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            match_label: entity.match_label,
            players: entity.players,
            substitutes: entity.substitutes,
            notes: entity.notes,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    /// Plain-text rendering posted to Discord by the bot.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Titulaires : {}", self.players.join(", "))];
        if !self.substitutes.is_empty() {
            lines.push(format!("Remplaçants : {}", self.substitutes.join(", ")));
        }
        if let Some(notes) = &self.notes {
            lines.push(notes.clone());
        }
        lines.join("\n")
    }

    pub fn into_dto(self) -> CompositionDto {
        CompositionDto {
            id: self.id,
            match_id: self.match_id,
            match_label: self.match_label,
            players: self.players,
            substitutes: self.substitutes,
            notes: self.notes,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompositionParam {
    pub match_id: Option<String>,
    pub match_label: String,
    pub players: Vec<String>,
    pub substitutes: Vec<String>,
    pub notes: Option<String>,
}

impl From<CreateCompositionDto> for CreateCompositionParam {
    fn from(dto: CreateCompositionDto) -> Self {
        Self {
            match_id: dto.match_id,
            match_label: dto.match_label.trim().to_string(),
            players: trimmed_names(dto.players),
            substitutes: trimmed_names(dto.substitutes),
            notes: dto.notes.filter(|notes| !notes.trim().is_empty()),
        }
    }
}

fn trimmed_names(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
