//! Communiqué (announcement) domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::communique::{CommuniqueDto, CreateCommuniqueDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Communique {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Communique {
    pub fn from_entity(entity: entity::communique::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            author: entity.author,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommuniqueDto {
        CommuniqueDto {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommuniqueParam {
    pub title: String,
    pub content: String,
}

impl From<CreateCommuniqueDto> for CreateCommuniqueParam {
    fn from(dto: CreateCommuniqueDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            content: dto.content.trim().to_string(),
        }
    }
}
