//! Sanction management.
//!
//! An actor may only sanction users whose effective role ranks strictly below
//! their own. The super admin is exempt.

use chrono::Utc;
use entity::prelude::SanctionKind;

use crate::server::{
    data::{sanction::SanctionRepository, store::JsonStore},
    error::{auth::AuthError, AppError},
    model::{
        audit::{Actor, AuditAction, CreateLogEntryParam},
        sanction::{IssueSanctionParam, Sanction},
        user::User,
    },
};

pub struct SanctionService<'a> {
    store: &'a JsonStore,
}

impl<'a> SanctionService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All sanctions, or only those targeting `user_id`, newest first.
    pub async fn get_sanctions(&self, user_id: Option<&str>) -> Result<Vec<Sanction>, AppError> {
        let repo = SanctionRepository::new(self.store);
        match user_id {
            Some(user_id) => repo.get_by_user(user_id).await,
            None => repo.get_all().await,
        }
    }

    /// Issues a sanction against a lower-ranked user.
    ///
    /// The target's rank is checked in the same store cycle as the write.
    ///
    /// # Returns
    /// - `Ok(Sanction)` - Sanction stored, user flags updated
    /// - `Err(AppError::BadRequest)` - Empty reason, non-positive or oversized duration
    /// - `Err(AppError::NotFound)` - Target user does not exist
    /// - `Err(AuthError::AccessDenied)` - Target does not rank below the actor
    pub async fn issue(
        &self,
        actor: &Actor,
        param: IssueSanctionParam,
    ) -> Result<Sanction, AppError> {
        if param.reason.is_empty() {
            return Err(AppError::BadRequest("A reason is required".to_string()));
        }
        if param.duration_minutes.is_some_and(|minutes| minutes <= 0) {
            return Err(AppError::BadRequest(
                "Duration must be a positive number of minutes".to_string(),
            ));
        }
        let now = Utc::now();
        param.expires_at(now)?;

        SanctionRepository::new(self.store)
            .issue(
                param,
                &actor.username,
                now,
                |target| check_target(actor, target),
                |sanction| {
                    CreateLogEntryParam::by(actor, AuditAction::SanctionIssue)
                        .target(&sanction.user_id)
                        .details(describe(sanction))
                },
            )
            .await
    }

    /// Lifts an active sanction.
    ///
    /// # Returns
    /// - `Ok(Sanction)` - Sanction deactivated
    /// - `Err(AppError::NotFound)` - No sanction with that id
    /// - `Err(AppError::BadRequest)` - Sanction already inactive
    /// - `Err(AuthError::AccessDenied)` - Target does not rank below the actor
    pub async fn lift(&self, actor: &Actor, sanction_id: &str) -> Result<Sanction, AppError> {
        SanctionRepository::new(self.store)
            .lift(
                sanction_id,
                Utc::now(),
                |target| check_target(actor, target),
                |sanction| {
                    CreateLogEntryParam::by(actor, AuditAction::SanctionLift)
                        .target(&sanction.user_id)
                        .details(&sanction.id)
                },
            )
            .await
    }
}

fn check_target(actor: &Actor, target: &User) -> Result<(), AppError> {
    if !actor.outranks(target.effective_role) {
        return Err(AuthError::AccessDenied(
            actor.id.clone(),
            format!(
                "cannot sanction user {} with role {}",
                target.id, target.effective_role
            ),
        )
        .into());
    }
    Ok(())
}

fn describe(sanction: &Sanction) -> String {
    let kind = match sanction.kind {
        SanctionKind::Warning => "warning",
        SanctionKind::Suspension => "suspension",
        SanctionKind::Ban => "ban",
    };
    match sanction.expires_at {
        Some(expires_at) => format!(
            "{} until {}: {}",
            kind,
            expires_at.to_rfc3339(),
            sanction.reason
        ),
        None => format!("{}: {}", kind, sanction.reason),
    }
}
