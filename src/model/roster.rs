use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: String,
    pub pseudo: String,
    pub position: String,
    pub discord_id: Option<String>,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddPlayerDto {
    pub pseudo: String,
    pub position: String,
    #[serde(default)]
    pub discord_id: Option<String>,
}
