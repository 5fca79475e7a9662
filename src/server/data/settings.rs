//! Club settings repository.

use chrono::{DateTime, Utc};

use crate::server::{
    data::{audit_log, store::JsonStore},
    error::AppError,
    model::{
        audit::CreateLogEntryParam,
        settings::{Settings, UpdateSettingsParam},
    },
};

pub struct SettingsRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Settings, AppError> {
        self.store
            .read(|document| Settings::from_entity(document.settings.clone()))
            .await
    }

    /// Applies the fields present in `param` and stamps `updated_at`.
    pub async fn update(
        &self,
        param: UpdateSettingsParam,
        now: DateTime<Utc>,
        audit: impl FnOnce(&Settings) -> CreateLogEntryParam,
    ) -> Result<Settings, AppError> {
        self.store
            .mutate(|document| {
                let settings = &mut document.settings;
                if let Some(club_name) = param.club_name {
                    settings.club_name = club_name;
                }
                if let Some(club_tag) = param.club_tag {
                    settings.club_tag = club_tag;
                }
                if let Some(recruitment_open) = param.recruitment_open {
                    settings.recruitment_open = recruitment_open;
                }
                settings.updated_at = Some(now);

                let settings = Settings::from_entity(settings.clone());
                audit_log::record(document, audit(&settings), now);
                Ok(settings)
            })
            .await
    }
}
