use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LogEntryDto {
    pub action: String,
    pub executor: String,
    pub target: Option<String>,
    pub details: Option<String>,
    pub ip: String,
    pub timestamp: DateTime<Utc>,
}
