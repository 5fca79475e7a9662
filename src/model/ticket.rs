use chrono::{DateTime, Utc};
use entity::prelude::TicketStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: String,
    pub author_id: String,
    pub subject: String,
    pub message: String,
    /// `open` or `closed`.
    #[schema(value_type = String)]
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub closed_by: Option<String>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpenTicketDto {
    pub subject: String,
    pub message: String,
}
