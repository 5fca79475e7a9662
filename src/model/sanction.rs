use chrono::{DateTime, Utc};
use entity::prelude::SanctionKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SanctionDto {
    pub id: String,
    pub user_id: String,
    /// One of `warning`, `suspension`, `ban`.
    #[schema(value_type = String)]
    pub kind: SanctionKind,
    pub reason: String,
    pub issued_by: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueSanctionDto {
    pub user_id: String,
    #[schema(value_type = String)]
    pub kind: SanctionKind,
    pub reason: String,
    /// Suspension length; omitted means indefinite. Ignored for other kinds.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}
