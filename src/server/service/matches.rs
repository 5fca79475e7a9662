//! Match calendar.

use chrono::Utc;

use crate::server::{
    data::{matches::MatchRepository, store::JsonStore},
    error::AppError,
    model::{
        audit::{Actor, AuditAction, CreateLogEntryParam},
        matches::{CreateMatchParam, Match, UpdateMatchParam},
    },
};

pub struct MatchService<'a> {
    store: &'a JsonStore,
}

impl<'a> MatchService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Match>, AppError> {
        MatchRepository::new(self.store).get_all().await
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty opponent
    pub async fn create(&self, actor: &Actor, param: CreateMatchParam) -> Result<Match, AppError> {
        if param.opponent.is_empty() {
            return Err(AppError::BadRequest("Opponent is required".to_string()));
        }

        MatchRepository::new(self.store)
            .create(param, &actor.username, Utc::now(), |record| {
                CreateLogEntryParam::by(actor, AuditAction::MatchCreate)
                    .target(&record.id)
                    .details(format!("vs {}", record.opponent))
            })
            .await
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Opponent provided but empty
    /// - `Err(AppError::NotFound)` - No match with that id
    pub async fn update(
        &self,
        actor: &Actor,
        match_id: &str,
        param: UpdateMatchParam,
    ) -> Result<Match, AppError> {
        if param.opponent.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Opponent cannot be empty".to_string()));
        }

        MatchRepository::new(self.store)
            .update(match_id, param, Utc::now(), |record| {
                CreateLogEntryParam::by(actor, AuditAction::MatchUpdate).target(&record.id)
            })
            .await
    }

    pub async fn delete(&self, actor: &Actor, match_id: &str) -> Result<(), AppError> {
        MatchRepository::new(self.store)
            .delete(match_id, Utc::now(), |record| {
                CreateLogEntryParam::by(actor, AuditAction::MatchDelete)
                    .target(&record.id)
                    .details(format!("vs {}", record.opponent))
            })
            .await?;

        Ok(())
    }
}
