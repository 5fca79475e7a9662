//! Roster repository.

use chrono::{DateTime, Utc};

use crate::server::{
    data::{audit_log, store::JsonStore},
    error::AppError,
    model::{
        audit::CreateLogEntryParam,
        roster::{AddPlayerParam, Player},
    },
};

pub struct RosterRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> RosterRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Roster in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Player>, AppError> {
        self.store
            .read(|document| {
                document
                    .roster
                    .iter()
                    .cloned()
                    .map(Player::from_entity)
                    .collect()
            })
            .await
    }

    pub async fn add(
        &self,
        param: AddPlayerParam,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Player) -> CreateLogEntryParam,
    ) -> Result<Player, AppError> {
        let player = entity::player::Model {
            id: uuid::Uuid::new_v4().to_string(),
            pseudo: param.pseudo,
            position: param.position,
            discord_id: param.discord_id,
            joined_at: now,
        };

        self.store
            .mutate(|document| {
                document.roster.push(player.clone());
                let player = Player::from_entity(player);
                audit_log::record(document, audit(&player), now);
                Ok(player)
            })
            .await
    }

    /// Removes a player, returning the removed record.
    pub async fn remove(
        &self,
        player_id: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Player) -> CreateLogEntryParam,
    ) -> Result<Player, AppError> {
        self.store
            .mutate(|document| {
                let index = document
                    .roster
                    .iter()
                    .position(|player| player.id == player_id)
                    .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))?;

                let player = Player::from_entity(document.roster.remove(index));
                audit_log::record(document, audit(&player), now);
                Ok(player)
            })
            .await
    }
}
