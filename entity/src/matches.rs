use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Played,
    Cancelled,
}

/// Scheduled or played match against another team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub opponent: String,
    #[serde(default)]
    pub competition: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(default)]
    pub score: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
