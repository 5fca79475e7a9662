use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanctionKind {
    Warning,
    Suspension,
    Ban,
}

/// Disciplinary action taken against a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub user_id: String,
    pub kind: SanctionKind,
    pub reason: String,
    pub issued_by: String,
    pub created_at: DateTime<Utc>,
    /// Only meaningful for suspensions; `None` means indefinite.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
}
