use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Club-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub club_name: String,
    pub club_tag: String,
    pub recruitment_open: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            club_name: "Club".to_string(),
            club_tag: "CLUB".to_string(),
            recruitment_open: false,
            updated_at: None,
        }
    }
}
