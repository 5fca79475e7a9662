use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotStatusDto {
    pub online: bool,
    pub last_heartbeat: Option<DateTime<Utc>>,
    /// Whatever the bot reported alongside its last heartbeat.
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
}

/// Liveness report posted by the bot process.
///
/// Only `secret` is interpreted; every other field is kept verbatim.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HeartbeatDto {
    pub secret: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
}
