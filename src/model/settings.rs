use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettingsDto {
    pub club_name: String,
    pub club_tag: String,
    pub recruitment_open: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSettingsDto {
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub club_tag: Option<String>,
    #[serde(default)]
    pub recruitment_open: Option<bool>,
}
