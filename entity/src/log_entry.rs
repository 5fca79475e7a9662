use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit log record. Written once, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub action: String,
    pub executor: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    pub ip: String,
    pub timestamp: DateTime<Utc>,
}
