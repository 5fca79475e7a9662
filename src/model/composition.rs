use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompositionDto {
    pub id: String,
    pub match_id: Option<String>,
    pub match_label: String,
    pub players: Vec<String>,
    pub substitutes: Vec<String>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCompositionDto {
    #[serde(default)]
    pub match_id: Option<String>,
    pub match_label: String,
    pub players: Vec<String>,
    #[serde(default)]
    pub substitutes: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
