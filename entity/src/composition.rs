use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Line-up published for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    /// Informal reference to a match id; not validated.
    #[serde(default)]
    pub match_id: Option<String>,
    pub match_label: String,
    pub players: Vec<String>,
    #[serde(default)]
    pub substitutes: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
