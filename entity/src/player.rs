use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roster slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub pseudo: String,
    pub position: String,
    #[serde(default)]
    pub discord_id: Option<String>,
    pub joined_at: DateTime<Utc>,
}
