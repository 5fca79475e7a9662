//! Composition repository.

use chrono::{DateTime, Utc};

use crate::server::{
    data::{audit_log, store::JsonStore},
    error::AppError,
    model::{
        audit::CreateLogEntryParam,
        composition::{Composition, CreateCompositionParam},
    },
};

pub struct CompositionRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> CompositionRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All compositions, newest first.
    pub async fn get_all(&self) -> Result<Vec<Composition>, AppError> {
        self.store
            .read(|document| {
                let mut compositions: Vec<Composition> = document
                    .compositions
                    .iter()
                    .cloned()
                    .map(Composition::from_entity)
                    .collect();
                compositions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                compositions
            })
            .await
    }

    /// Stores a composition and records the entry `audit` builds for it.
    pub async fn create(
        &self,
        param: CreateCompositionParam,
        created_by: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Composition) -> CreateLogEntryParam,
    ) -> Result<Composition, AppError> {
        let composition = entity::composition::Model {
            id: uuid::Uuid::new_v4().to_string(),
            match_id: param.match_id,
            match_label: param.match_label,
            players: param.players,
            substitutes: param.substitutes,
            notes: param.notes,
            created_by: created_by.to_string(),
            created_at: now,
        };

        self.store
            .mutate(|document| {
                document.compositions.push(composition.clone());
                let composition = Composition::from_entity(composition);
                audit_log::record(document, audit(&composition), now);
                Ok(composition)
            })
            .await
    }
}
