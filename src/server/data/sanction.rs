//! Sanction repository.
//!
//! Sanctions drive the `suspended` and `banned` flags on the targeted user.
//! Every mutation here recomputes those flags from the user's active
//! sanctions within the same store cycle.

use chrono::{DateTime, Utc};
use entity::prelude::{Document, SanctionKind};

use crate::server::{
    data::{audit_log, store::JsonStore, user::find_mut},
    error::AppError,
    model::{
        audit::{AuditAction, CreateLogEntryParam, SYSTEM_EXECUTOR},
        sanction::{IssueSanctionParam, Sanction},
        user::User,
    },
};

pub struct SanctionRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> SanctionRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All sanctions, newest first.
    pub async fn get_all(&self) -> Result<Vec<Sanction>, AppError> {
        self.store
            .read(|document| newest_first(document.sanctions.iter().cloned()))
            .await
    }

    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Sanction>, AppError> {
        self.store
            .read(|document| {
                newest_first(
                    document
                        .sanctions
                        .iter()
                        .filter(|sanction| sanction.user_id == user_id)
                        .cloned(),
                )
            })
            .await
    }

    /// Records a sanction and applies its flag to the target user.
    ///
    /// `authorize` is called with the target user and `audit` with the stored
    /// sanction, both inside the same store cycle as the write. Nothing is
    /// written when either the target check or the expiry computation fails.
    ///
    /// # Returns
    /// - `Ok(Sanction)` - Stored sanction
    /// - `Err(AppError::NotFound)` - Target user does not exist
    /// - `Err(AppError::BadRequest)` - Duration does not fit the calendar
    /// - `Err(AppError)` - Error returned by `authorize`
    pub async fn issue(
        &self,
        param: IssueSanctionParam,
        issued_by: &str,
        now: DateTime<Utc>,
        authorize: impl FnOnce(&User) -> Result<(), AppError>,
        audit: impl FnOnce(&Sanction) -> CreateLogEntryParam,
    ) -> Result<Sanction, AppError> {
        self.store
            .mutate(|document| {
                let target = find_mut(document, &param.user_id)?;
                authorize(&User::from_entity(target.clone()))?;

                let expires_at = param.expires_at(now)?;
                let sanction = entity::sanction::Model {
                    id: uuid::Uuid::new_v4().to_string(),
                    user_id: param.user_id,
                    kind: param.kind,
                    reason: param.reason,
                    issued_by: issued_by.to_string(),
                    created_at: now,
                    expires_at,
                    active: true,
                };
                document.sanctions.push(sanction.clone());
                refresh_flags(document, &sanction.user_id);

                let sanction = Sanction::from_entity(sanction);
                audit_log::record(document, audit(&sanction), now);
                Ok(sanction)
            })
            .await
    }

    /// Deactivates a sanction.
    ///
    /// `authorize` is called with the sanctioned user before anything changes;
    /// the check and the write share one store cycle.
    ///
    /// # Returns
    /// - `Ok(Sanction)` - Sanction after lifting
    /// - `Err(AppError::NotFound)` - No sanction with that id, or its user is gone
    /// - `Err(AppError::BadRequest)` - Sanction is no longer active
    /// - `Err(AppError)` - Error returned by `authorize`
    pub async fn lift(
        &self,
        sanction_id: &str,
        now: DateTime<Utc>,
        authorize: impl FnOnce(&User) -> Result<(), AppError>,
        audit: impl FnOnce(&Sanction) -> CreateLogEntryParam,
    ) -> Result<Sanction, AppError> {
        self.store
            .mutate(|document| {
                let index = document
                    .sanctions
                    .iter()
                    .position(|sanction| sanction.id == sanction_id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Sanction {} not found", sanction_id))
                    })?;

                let user_id = document.sanctions[index].user_id.clone();
                let target = find_mut(document, &user_id)?;
                authorize(&User::from_entity(target.clone()))?;

                let sanction = &mut document.sanctions[index];
                if !sanction.active {
                    return Err(AppError::BadRequest(
                        "Sanction is no longer active".to_string(),
                    ));
                }
                sanction.active = false;
                let lifted = Sanction::from_entity(sanction.clone());

                refresh_flags(document, &user_id);
                audit_log::record(document, audit(&lifted), now);
                Ok(lifted)
            })
            .await
    }

    /// Deactivates every suspension whose expiry is at or before `now`.
    ///
    /// Records one `sanction_expire` audit entry per expired suspension in the
    /// same store cycle. Nothing is written when no suspension is due.
    ///
    /// # Returns
    /// - `Ok(Vec<Sanction>)` - Suspensions that expired during this call
    pub async fn expire_due(&self, now: DateTime<Utc>) -> Result<Vec<Sanction>, AppError> {
        let due = self
            .store
            .read(|document| document.sanctions.iter().any(|s| is_due(s, now)))
            .await?;
        if !due {
            return Ok(Vec::new());
        }

        self.store
            .mutate(|document| {
                let mut expired = Vec::new();
                for sanction in document.sanctions.iter_mut().filter(|s| is_due(s, now)) {
                    sanction.active = false;
                    expired.push(sanction.clone());
                }

                for sanction in &expired {
                    refresh_flags(document, &sanction.user_id);
                    audit_log::prepend(
                        document,
                        entity::log_entry::Model {
                            action: AuditAction::SanctionExpire.to_string(),
                            executor: SYSTEM_EXECUTOR.to_string(),
                            target: Some(sanction.user_id.clone()),
                            details: Some(sanction.id.clone()),
                            ip: SYSTEM_EXECUTOR.to_string(),
                            timestamp: now,
                        },
                    );
                }

                Ok(expired.into_iter().map(Sanction::from_entity).collect())
            })
            .await
    }
}

fn is_due(sanction: &entity::sanction::Model, now: DateTime<Utc>) -> bool {
    sanction.active
        && sanction.kind == SanctionKind::Suspension
        && sanction.expires_at.is_some_and(|expires_at| expires_at <= now)
}

/// Sets the user's moderation flags from their remaining active sanctions.
fn refresh_flags(document: &mut Document, user_id: &str) {
    let active = |kind: SanctionKind| {
        document
            .sanctions
            .iter()
            .any(|s| s.user_id == user_id && s.active && s.kind == kind)
    };
    let suspended = active(SanctionKind::Suspension);
    let banned = active(SanctionKind::Ban);

    if let Some(user) = document.users.iter_mut().find(|user| user.id == user_id) {
        user.suspended = suspended;
        user.banned = banned;
    }
}

fn newest_first(sanctions: impl Iterator<Item = entity::sanction::Model>) -> Vec<Sanction> {
    let mut sanctions: Vec<Sanction> = sanctions.map(Sanction::from_entity).collect();
    sanctions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sanctions
}
