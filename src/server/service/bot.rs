//! Bridge to the companion Discord bot process.
//!
//! Outbound notifications go through an unbounded queue drained by a single
//! dispatcher task, so publishing never waits on the bot. Inbound heartbeats
//! update an in-memory status that is lost on restart.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tokio::{
    sync::{mpsc, RwLock},
    task::JoinHandle,
};

use crate::{
    model::bot::HeartbeatDto,
    server::{
        error::{auth::AuthError, AppError},
        model::bot::{BotNotification, BotStatus},
    },
};

/// Header carrying the shared secret on outbound webhook requests.
pub const BOT_SECRET_HEADER: &str = "x-bot-secret";

/// Sending half of the notification queue.
#[derive(Clone)]
pub struct BotBridge {
    sender: mpsc::UnboundedSender<BotNotification>,
}

impl BotBridge {
    /// Creates the bridge and the receiving half of its queue.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<BotNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Enqueues a notification for delivery. Never blocks.
    pub fn notify(&self, notification: BotNotification) {
        if self.sender.send(notification).is_err() {
            tracing::warn!("Bot dispatcher is not running, notification dropped");
        }
    }
}

/// Delivers queued notifications to the bot's webhook server.
pub struct BotDispatcher {
    http_client: reqwest::Client,
    /// Base URL without trailing slash; `None` drops every notification.
    webhook_url: Option<String>,
    shared_secret: String,
}

impl BotDispatcher {
    pub fn new(
        http_client: reqwest::Client,
        webhook_url: Option<String>,
        shared_secret: String,
    ) -> Self {
        Self {
            http_client,
            webhook_url,
            shared_secret,
        }
    }

    /// Spawns the dispatcher task. It exits once every `BotBridge` is dropped.
    pub fn spawn(self, receiver: mpsc::UnboundedReceiver<BotNotification>) -> JoinHandle<()> {
        tokio::spawn(self.run(receiver))
    }

    async fn run(self, mut receiver: mpsc::UnboundedReceiver<BotNotification>) {
        while let Some(notification) = receiver.recv().await {
            self.deliver(notification).await;
        }
        tracing::debug!("Bot notification queue closed");
    }

    /// Posts one notification. Failures are logged and the notification is dropped.
    async fn deliver(&self, notification: BotNotification) {
        let Some(webhook_url) = &self.webhook_url else {
            tracing::debug!(
                "BOT_WEBHOOK_URL not set, dropping {} notification",
                notification.path()
            );
            return;
        };

        let url = format!("{}/{}", webhook_url, notification.path());
        let result = self
            .http_client
            .post(&url)
            .header(BOT_SECRET_HEADER, &self.shared_secret)
            .json(&notification)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status);

        match result {
            Ok(_) => tracing::debug!("Delivered bot notification to {}", url),
            Err(e) => tracing::warn!("Failed to deliver bot notification to {}: {}", url, e),
        }
    }
}

/// Last heartbeat received from the bot.
#[derive(Clone, Default)]
pub struct BotStatusTracker {
    status: Arc<RwLock<Option<BotStatus>>>,
}

impl BotStatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, fields: Map<String, Value>, now: DateTime<Utc>) {
        *self.status.write().await = Some(BotStatus {
            last_heartbeat: now,
            fields,
        });
    }

    pub async fn snapshot(&self) -> Option<BotStatus> {
        self.status.read().await.clone()
    }
}

pub struct BotService<'a> {
    tracker: &'a BotStatusTracker,
    shared_secret: &'a str,
}

impl<'a> BotService<'a> {
    pub fn new(tracker: &'a BotStatusTracker, shared_secret: &'a str) -> Self {
        Self {
            tracker,
            shared_secret,
        }
    }

    /// Accepts a heartbeat carrying the shared secret.
    ///
    /// The secret is compared in constant time.
    ///
    /// # Returns
    /// - `Ok(())` - Heartbeat recorded
    /// - `Err(AuthError::InvalidBotSecret)` - Secret mismatch, status unchanged
    pub async fn heartbeat(&self, heartbeat: HeartbeatDto) -> Result<(), AppError> {
        let matches: bool = heartbeat
            .secret
            .as_bytes()
            .ct_eq(self.shared_secret.as_bytes())
            .into();
        if !matches {
            tracing::warn!("Rejected bot heartbeat with invalid secret");
            return Err(AuthError::InvalidBotSecret.into());
        }

        self.tracker.record(heartbeat.fields, Utc::now()).await;
        Ok(())
    }

    pub async fn status(&self) -> Option<BotStatus> {
        self.tracker.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heartbeat(secret: &str) -> HeartbeatDto {
        let mut fields = Map::new();
        fields.insert("guilds".to_string(), Value::from(3));
        HeartbeatDto {
            secret: secret.to_string(),
            fields,
        }
    }

    #[tokio::test]
    async fn heartbeat_with_secret_records_fields() -> Result<(), AppError> {
        let tracker = BotStatusTracker::new();
        let service = BotService::new(&tracker, "s3cret");

        service.heartbeat(heartbeat("s3cret")).await?;

        let status = service.status().await.unwrap();
        assert_eq!(status.fields.get("guilds"), Some(&Value::from(3)));
        assert!(status.is_online_at(Utc::now()));

        Ok(())
    }

    #[tokio::test]
    async fn heartbeat_with_wrong_secret_is_rejected() {
        let tracker = BotStatusTracker::new();
        let service = BotService::new(&tracker, "s3cret");

        for secret in ["nope", "s3cre", "s3cretx", ""] {
            let result = service.heartbeat(heartbeat(secret)).await;

            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidBotSecret))
            ));
        }
        assert!(service.status().await.is_none());
    }

    #[tokio::test]
    async fn bridge_enqueues_without_waiting() {
        let (bridge, mut receiver) = BotBridge::channel();
        let notification = BotNotification::Communique {
            title: "Match".to_string(),
            content: "Ce soir".to_string(),
        };

        bridge.notify(notification.clone());

        assert_eq!(receiver.try_recv().ok(), Some(notification));
    }

    #[tokio::test]
    async fn dispatcher_without_webhook_drains_queue() {
        let (bridge, receiver) = BotBridge::channel();
        let handle = BotDispatcher::new(reqwest::Client::new(), None, "s3cret".to_string())
            .spawn(receiver);

        bridge.notify(BotNotification::Communique {
            title: "t".to_string(),
            content: "c".to_string(),
        });
        drop(bridge);

        handle.await.unwrap();
    }
}
