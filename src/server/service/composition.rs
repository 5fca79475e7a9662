//! Match line-ups. Publishing forwards the line-up to the bot.

use chrono::Utc;

use crate::server::{
    data::{composition::CompositionRepository, store::JsonStore},
    error::AppError,
    model::{
        audit::{Actor, AuditAction, CreateLogEntryParam},
        bot::BotNotification,
        composition::{Composition, CreateCompositionParam},
    },
    service::bot::BotBridge,
};

pub struct CompositionService<'a> {
    store: &'a JsonStore,
    bot_bridge: &'a BotBridge,
}

impl<'a> CompositionService<'a> {
    pub fn new(store: &'a JsonStore, bot_bridge: &'a BotBridge) -> Self {
        Self { store, bot_bridge }
    }

    pub async fn get_all(&self) -> Result<Vec<Composition>, AppError> {
        CompositionRepository::new(self.store).get_all().await
    }

    /// Stores a composition and enqueues its announcement.
    ///
    /// The bot notification is only enqueued once the composition is persisted.
    ///
    /// # Returns
    /// - `Ok(Composition)` - Stored composition
    /// - `Err(AppError::BadRequest)` - Missing match label or no players
    pub async fn publish(
        &self,
        actor: &Actor,
        param: CreateCompositionParam,
    ) -> Result<Composition, AppError> {
        if param.match_label.is_empty() {
            return Err(AppError::BadRequest("Match label is required".to_string()));
        }
        if param.players.is_empty() {
            return Err(AppError::BadRequest(
                "A composition needs at least one player".to_string(),
            ));
        }

        let composition = CompositionRepository::new(self.store)
            .create(param, &actor.username, Utc::now(), |composition| {
                CreateLogEntryParam::by(actor, AuditAction::CompositionPublish)
                    .target(&composition.id)
                    .details(&composition.match_label)
            })
            .await?;

        self.bot_bridge.notify(BotNotification::Composition {
            match_label: composition.match_label.clone(),
            composition: composition.summary(),
        });

        Ok(composition)
    }
}
