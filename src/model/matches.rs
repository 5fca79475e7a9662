use chrono::{DateTime, Utc};
use entity::prelude::MatchStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchDto {
    pub id: String,
    pub opponent: String,
    pub competition: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    /// One of `scheduled`, `played`, `cancelled`.
    #[schema(value_type = String)]
    pub status: MatchStatus,
    pub score: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMatchDto {
    pub opponent: String,
    #[serde(default)]
    pub competition: Option<String>,
    pub scheduled_at: DateTime<Utc>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMatchDto {
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub score: Option<String>,
}
