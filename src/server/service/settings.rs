//! Club settings.

use chrono::Utc;

use crate::server::{
    data::{settings::SettingsRepository, store::JsonStore},
    error::AppError,
    model::{
        audit::{Actor, AuditAction, CreateLogEntryParam},
        settings::{Settings, UpdateSettingsParam},
    },
};

pub struct SettingsService<'a> {
    store: &'a JsonStore,
}

impl<'a> SettingsService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Settings, AppError> {
        SettingsRepository::new(self.store).get().await
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Club name or tag provided but empty
    pub async fn update(
        &self,
        actor: &Actor,
        param: UpdateSettingsParam,
    ) -> Result<Settings, AppError> {
        let blank = |value: &Option<String>| value.as_deref().is_some_and(str::is_empty);
        if blank(&param.club_name) || blank(&param.club_tag) {
            return Err(AppError::BadRequest(
                "Club name and tag cannot be empty".to_string(),
            ));
        }

        SettingsRepository::new(self.store)
            .update(param, Utc::now(), |settings| {
                CreateLogEntryParam::by(actor, AuditAction::SettingsUpdate)
                    .details(format!("{} [{}]", settings.club_name, settings.club_tag))
            })
            .await
    }
}
