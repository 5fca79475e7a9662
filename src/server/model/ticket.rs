//! Support ticket domain models and parameters.

use chrono::{DateTime, Utc};
use entity::prelude::TicketStatus;

use crate::model::ticket::{OpenTicketDto, TicketDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub author_id: String,
    pub subject: String,
    pub message: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub closed_by: Option<String>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            subject: entity.subject,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
            closed_by: entity.closed_by,
            closed_at: entity.closed_at,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            author_id: self.author_id,
            subject: self.subject,
            message: self.message,
            status: self.status,
            created_at: self.created_at,
            closed_by: self.closed_by,
            closed_at: self.closed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenTicketParam {
    pub subject: String,
    pub message: String,
}

impl From<OpenTicketDto> for OpenTicketParam {
    fn from(dto: OpenTicketDto) -> Self {
        Self {
            subject: dto.subject.trim().to_string(),
            message: dto.message.trim().to_string(),
        }
    }
}
