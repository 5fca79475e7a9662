//! Bot bridge domain models.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::bot::BotStatusDto;

/// Window after the last heartbeat during which the bot counts as online.
pub const BOT_ONLINE_WINDOW_SECONDS: i64 = 30;

/// Last liveness report received from the bot process. Kept in memory only.
#[derive(Debug, Clone, PartialEq)]
pub struct BotStatus {
    pub last_heartbeat: DateTime<Utc>,
    pub fields: Map<String, Value>,
}

impl BotStatus {
    /// Online iff strictly less than 30 seconds have elapsed since the heartbeat.
    pub fn is_online_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_heartbeat)
            < Duration::seconds(BOT_ONLINE_WINDOW_SECONDS)
    }
}

/// Builds the status DTO, reporting offline when no heartbeat was ever received.
pub fn status_dto(status: Option<BotStatus>, now: DateTime<Utc>) -> BotStatusDto {
    match status {
        Some(status) => BotStatusDto {
            online: status.is_online_at(now),
            last_heartbeat: Some(status.last_heartbeat),
            fields: status.fields,
        },
        None => BotStatusDto {
            online: false,
            last_heartbeat: None,
            fields: Map::new(),
        },
    }
}

/// Outbound message to the bot process.
///
/// Serialized as the webhook request body; `path` selects the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BotNotification {
    Composition {
        match_label: String,
        /// Human-readable line-up, one line per section.
        composition: String,
    },
    Communique {
        title: String,
        content: String,
    },
}

impl BotNotification {
    /// Endpoint path on the bot's webhook server.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Composition { .. } => "compositions",
            Self::Communique { .. } => "communiques",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_at(last_heartbeat: DateTime<Utc>) -> BotStatus {
        BotStatus {
            last_heartbeat,
            fields: Map::new(),
        }
    }

    #[test]
    fn online_within_window() {
        let now = Utc::now();
        let status = status_at(now - Duration::milliseconds(29_999));

        assert!(status.is_online_at(now));
        assert!(status.is_online_at(status.last_heartbeat));
    }

    #[test]
    fn offline_at_exactly_thirty_seconds() {
        let now = Utc::now();
        let status = status_at(now - Duration::seconds(30));

        assert!(!status.is_online_at(now));
        assert!(!status.is_online_at(now + Duration::seconds(5)));
    }

    #[test]
    fn no_heartbeat_reports_offline() {
        let dto = status_dto(None, Utc::now());

        assert!(!dto.online);
        assert!(dto.last_heartbeat.is_none());
    }

    #[test]
    fn notification_body_omits_variant_name() {
        let notification = BotNotification::Communique {
            title: "Recrutement".to_string(),
            content: "Ouvert".to_string(),
        };

        assert_eq!(notification.path(), "communiques");
        assert_eq!(
            serde_json::to_value(&notification).unwrap(),
            serde_json::json!({ "title": "Recrutement", "content": "Ouvert" })
        );
    }
}
