//! User and owner management.
//!
//! Role changes are bounded by the actor's own rank: an actor can only grant
//! or revoke roles that rank strictly below their effective role, and the
//! `owner` role is reserved for the owner operations.

use chrono::Utc;

use crate::{
    model::role::Role,
    server::{
        data::{store::JsonStore, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            audit::{Actor, AuditAction, CreateLogEntryParam},
            user::{RoleChangeParam, User},
        },
    },
};

pub struct UserService<'a> {
    store: &'a JsonStore,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.store).get_all().await
    }

    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_user(&self, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.store)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Grants a role to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - User after the grant
    /// - `Err(AppError::BadRequest)` - Role is `owner`
    /// - `Err(AuthError::AccessDenied)` - Role does not rank below the actor
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn grant_role(
        &self,
        actor: &Actor,
        param: RoleChangeParam,
    ) -> Result<User, AppError> {
        check_role_change(actor, param.role)?;

        let role = param.role;
        UserRepository::new(self.store)
            .add_role(param, Utc::now(), |user| {
                CreateLogEntryParam::by(actor, AuditAction::RoleGrant)
                    .target(&user.id)
                    .details(role.to_string())
            })
            .await
    }

    /// Revokes a role from a user. Same restrictions as `grant_role`.
    pub async fn revoke_role(
        &self,
        actor: &Actor,
        param: RoleChangeParam,
    ) -> Result<User, AppError> {
        check_role_change(actor, param.role)?;

        let role = param.role;
        UserRepository::new(self.store)
            .remove_role(param, Utc::now(), |user| {
                CreateLogEntryParam::by(actor, AuditAction::RoleRevoke)
                    .target(&user.id)
                    .details(role.to_string())
            })
            .await
    }

    pub async fn get_owners(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.store).get_owners().await
    }

    /// Grants the `owner` role.
    pub async fn add_owner(&self, actor: &Actor, user_id: &str) -> Result<User, AppError> {
        let param = RoleChangeParam {
            user_id: user_id.to_string(),
            role: Role::Owner,
        };
        UserRepository::new(self.store)
            .add_role(param, Utc::now(), |user| {
                CreateLogEntryParam::by(actor, AuditAction::OwnerAdd).target(&user.id)
            })
            .await
    }

    /// Revokes the `owner` role.
    ///
    /// # Returns
    /// - `Ok(User)` - User after the removal
    /// - `Err(AppError::BadRequest)` - User is the last owner
    /// - `Err(AppError::NotFound)` - No such user, or the user is not an owner
    pub async fn remove_owner(&self, actor: &Actor, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.store)
            .remove_owner(user_id, Utc::now(), |user| {
                CreateLogEntryParam::by(actor, AuditAction::OwnerRemove).target(&user.id)
            })
            .await
    }
}

fn check_role_change(actor: &Actor, role: Role) -> Result<(), AppError> {
    if role == Role::Owner {
        return Err(AppError::BadRequest(
            "The owner role is managed through the owner endpoints".to_string(),
        ));
    }
    if !actor.outranks(role) {
        return Err(AuthError::AccessDenied(
            actor.id.clone(),
            format!("cannot manage role {} with role {}", role, actor.role),
        )
        .into());
    }
    Ok(())
}
