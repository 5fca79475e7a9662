//! Team roster.

use chrono::Utc;

use crate::server::{
    data::{roster::RosterRepository, store::JsonStore},
    error::AppError,
    model::{
        audit::{Actor, AuditAction, CreateLogEntryParam},
        roster::{AddPlayerParam, Player},
    },
};

pub struct RosterService<'a> {
    store: &'a JsonStore,
}

impl<'a> RosterService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Player>, AppError> {
        RosterRepository::new(self.store).get_all().await
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty pseudo or position
    pub async fn add(&self, actor: &Actor, param: AddPlayerParam) -> Result<Player, AppError> {
        if param.pseudo.is_empty() || param.position.is_empty() {
            return Err(AppError::BadRequest(
                "Pseudo and position are required".to_string(),
            ));
        }

        RosterRepository::new(self.store)
            .add(param, Utc::now(), |player| {
                CreateLogEntryParam::by(actor, AuditAction::RosterAdd)
                    .target(&player.id)
                    .details(&player.pseudo)
            })
            .await
    }

    pub async fn remove(&self, actor: &Actor, player_id: &str) -> Result<(), AppError> {
        RosterRepository::new(self.store)
            .remove(player_id, Utc::now(), |player| {
                CreateLogEntryParam::by(actor, AuditAction::RosterRemove)
                    .target(&player.id)
                    .details(&player.pseudo)
            })
            .await?;

        Ok(())
    }
}
