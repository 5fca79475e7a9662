//! Communiqué repository.

use chrono::{DateTime, Utc};

use crate::server::{
    data::{audit_log, store::JsonStore},
    error::AppError,
    model::{
        audit::CreateLogEntryParam,
        communique::{Communique, CreateCommuniqueParam},
    },
};

pub struct CommuniqueRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> CommuniqueRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All communiqués, newest first.
    pub async fn get_all(&self) -> Result<Vec<Communique>, AppError> {
        self.store
            .read(|document| {
                let mut communiques: Vec<Communique> = document
                    .communiques
                    .iter()
                    .cloned()
                    .map(Communique::from_entity)
                    .collect();
                communiques.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                communiques
            })
            .await
    }

    pub async fn create(
        &self,
        param: CreateCommuniqueParam,
        author: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Communique) -> CreateLogEntryParam,
    ) -> Result<Communique, AppError> {
        let communique = entity::communique::Model {
            id: uuid::Uuid::new_v4().to_string(),
            title: param.title,
            content: param.content,
            author: author.to_string(),
            created_at: now,
        };

        self.store
            .mutate(|document| {
                document.communiques.push(communique.clone());
                let communique = Communique::from_entity(communique);
                audit_log::record(document, audit(&communique), now);
                Ok(communique)
            })
            .await
    }
}
