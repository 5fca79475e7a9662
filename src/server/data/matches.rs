//! Match repository.

use chrono::{DateTime, Utc};
use entity::prelude::MatchStatus;

use crate::server::{
    data::{audit_log, store::JsonStore},
    error::AppError,
    model::{
        audit::CreateLogEntryParam,
        matches::{CreateMatchParam, Match, UpdateMatchParam},
    },
};

pub struct MatchRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> MatchRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All matches ordered by scheduled time, earliest first.
    pub async fn get_all(&self) -> Result<Vec<Match>, AppError> {
        self.store
            .read(|document| {
                let mut matches: Vec<Match> = document
                    .matches
                    .iter()
                    .cloned()
                    .map(Match::from_entity)
                    .collect();
                matches.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
                matches
            })
            .await
    }

    pub async fn create(
        &self,
        param: CreateMatchParam,
        created_by: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Match) -> CreateLogEntryParam,
    ) -> Result<Match, AppError> {
        let record = entity::matches::Model {
            id: uuid::Uuid::new_v4().to_string(),
            opponent: param.opponent,
            competition: param.competition,
            scheduled_at: param.scheduled_at,
            status: MatchStatus::Scheduled,
            score: None,
            created_by: created_by.to_string(),
            created_at: now,
        };

        self.store
            .mutate(|document| {
                document.matches.push(record.clone());
                let record = Match::from_entity(record);
                audit_log::record(document, audit(&record), now);
                Ok(record)
            })
            .await
    }

    /// Applies the fields present in `param`.
    ///
    /// # Returns
    /// - `Ok(Match)` - Match after the update
    /// - `Err(AppError::NotFound)` - No match with that id
    pub async fn update(
        &self,
        match_id: &str,
        param: UpdateMatchParam,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Match) -> CreateLogEntryParam,
    ) -> Result<Match, AppError> {
        self.store
            .mutate(|document| {
                let record = document
                    .matches
                    .iter_mut()
                    .find(|record| record.id == match_id)
                    .ok_or_else(|| not_found(match_id))?;

                if let Some(opponent) = param.opponent {
                    record.opponent = opponent;
                }
                if let Some(competition) = param.competition {
                    record.competition = Some(competition);
                }
                if let Some(scheduled_at) = param.scheduled_at {
                    record.scheduled_at = scheduled_at;
                }
                if let Some(status) = param.status {
                    record.status = status;
                }
                if let Some(score) = param.score {
                    record.score = Some(score);
                }

                let record = Match::from_entity(record.clone());
                audit_log::record(document, audit(&record), now);
                Ok(record)
            })
            .await
    }

    /// Deletes a match, returning the removed record.
    pub async fn delete(
        &self,
        match_id: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Match) -> CreateLogEntryParam,
    ) -> Result<Match, AppError> {
        self.store
            .mutate(|document| {
                let index = document
                    .matches
                    .iter()
                    .position(|record| record.id == match_id)
                    .ok_or_else(|| not_found(match_id))?;

                let record = Match::from_entity(document.matches.remove(index));
                audit_log::record(document, audit(&record), now);
                Ok(record)
            })
            .await
    }
}

fn not_found(match_id: &str) -> AppError {
    AppError::NotFound(format!("Match {} not found", match_id))
}
