//! Club announcements. Publishing forwards the announcement to the bot.

use chrono::Utc;

use crate::server::{
    data::{communique::CommuniqueRepository, store::JsonStore},
    error::AppError,
    model::{
        audit::{Actor, AuditAction, CreateLogEntryParam},
        bot::BotNotification,
        communique::{Communique, CreateCommuniqueParam},
    },
    service::bot::BotBridge,
};

pub struct CommuniqueService<'a> {
    store: &'a JsonStore,
    bot_bridge: &'a BotBridge,
}

impl<'a> CommuniqueService<'a> {
    pub fn new(store: &'a JsonStore, bot_bridge: &'a BotBridge) -> Self {
        Self { store, bot_bridge }
    }

    pub async fn get_all(&self) -> Result<Vec<Communique>, AppError> {
        CommuniqueRepository::new(self.store).get_all().await
    }

    /// # Returns
    /// - `Ok(Communique)` - Stored communiqué, notification enqueued
    /// - `Err(AppError::BadRequest)` - Empty title or content
    pub async fn publish(
        &self,
        actor: &Actor,
        param: CreateCommuniqueParam,
    ) -> Result<Communique, AppError> {
        if param.title.is_empty() || param.content.is_empty() {
            return Err(AppError::BadRequest(
                "Title and content are required".to_string(),
            ));
        }

        let communique = CommuniqueRepository::new(self.store)
            .create(param, &actor.username, Utc::now(), |communique| {
                CreateLogEntryParam::by(actor, AuditAction::CommuniquePublish)
                    .target(&communique.id)
                    .details(&communique.title)
            })
            .await?;

        self.bot_bridge.notify(BotNotification::Communique {
            title: communique.title.clone(),
            content: communique.content.clone(),
        });

        Ok(communique)
    }
}
