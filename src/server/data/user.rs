//! User repository for store operations.
//!
//! Handles account lookup, first-login creation, profile refresh and role
//! assignment. Role names are written in their canonical lowercase form.

use chrono::{DateTime, Utc};
use entity::prelude::Document;

use crate::{
    model::role::Role,
    server::{
        data::{audit_log, store::JsonStore},
        error::AppError,
        model::{
            audit::CreateLogEntryParam,
            user::{RoleChangeParam, UpsertDiscordUserParam, User},
        },
    },
};

pub struct UserRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> UserRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        self.store
            .read(|document| {
                document
                    .users
                    .iter()
                    .cloned()
                    .map(User::from_entity)
                    .collect()
            })
            .await
    }

    /// Finds a user by store id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Store could not be loaded
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.store
            .read(|document| {
                document
                    .users
                    .iter()
                    .find(|user| user.id == user_id)
                    .cloned()
                    .map(User::from_entity)
            })
            .await
    }

    /// Finds a user by username, ignoring ASCII case.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.store
            .read(|document| {
                document
                    .users
                    .iter()
                    .find(|user| user.username.eq_ignore_ascii_case(username))
                    .cloned()
                    .map(User::from_entity)
            })
            .await
    }

    /// Resolves the account for a Discord login, creating it on first login.
    ///
    /// Existing accounts have their username and avatar refreshed; their roles
    /// are left untouched. New accounts get the default role. The login itself
    /// is stamped by `record_login` once the account is allowed in.
    ///
    /// # Returns
    /// - `Ok((User, true))` - Account was created
    /// - `Ok((User, false))` - Existing account was refreshed
    pub async fn upsert_discord(
        &self,
        param: UpsertDiscordUserParam,
        now: DateTime<Utc>,
    ) -> Result<(User, bool), AppError> {
        self.store
            .mutate(|document| {
                let existing = document.users.iter_mut().find(|user| {
                    user.discord_id.as_deref() == Some(param.discord_id.as_str())
                        || user.id == param.discord_id
                });

                if let Some(user) = existing {
                    user.username = param.username;
                    user.avatar = param.avatar;
                    user.discord_id = Some(param.discord_id);
                    return Ok((User::from_entity(user.clone()), false));
                }

                let user = entity::user::Model {
                    id: param.discord_id.clone(),
                    username: param.username,
                    password_hash: None,
                    roles: vec![Role::DEFAULT.to_string()],
                    account_type: None,
                    discord_id: Some(param.discord_id),
                    avatar: param.avatar,
                    created_at: now,
                    last_login_at: None,
                    suspended: false,
                    banned: false,
                };
                document.users.push(user.clone());

                Ok((User::from_entity(user), true))
            })
            .await
    }

    /// Sets the last login timestamp of an existing user and records the
    /// entry `audit` builds for the login.
    pub async fn record_login(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&User) -> CreateLogEntryParam,
    ) -> Result<User, AppError> {
        self.store
            .mutate(|document| {
                let user = find_mut(document, user_id)?;
                user.last_login_at = Some(now);
                let user = User::from_entity(user.clone());
                audit_log::record(document, audit(&user), now);
                Ok(user)
            })
            .await
    }

    /// Adds a role to a user. Granting a role already held is a no-op.
    ///
    /// # Returns
    /// - `Ok(User)` - User after the change
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn add_role(
        &self,
        param: RoleChangeParam,
        now: DateTime<Utc>,
        audit: impl FnOnce(&User) -> CreateLogEntryParam,
    ) -> Result<User, AppError> {
        self.store
            .mutate(|document| {
                let user = find_mut(document, &param.user_id)?;
                let name = param.role.to_string();
                if !user.roles.iter().any(|role| role.eq_ignore_ascii_case(&name)) {
                    user.roles.push(name);
                }
                let user = User::from_entity(user.clone());
                audit_log::record(document, audit(&user), now);
                Ok(user)
            })
            .await
    }

    /// Removes a role from a user, including a matching legacy account type.
    ///
    /// # Returns
    /// - `Ok(User)` - User after the change
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn remove_role(
        &self,
        param: RoleChangeParam,
        now: DateTime<Utc>,
        audit: impl FnOnce(&User) -> CreateLogEntryParam,
    ) -> Result<User, AppError> {
        self.store
            .mutate(|document| {
                let user = find_mut(document, &param.user_id)?;
                strip_role(user, param.role);
                let user = User::from_entity(user.clone());
                audit_log::record(document, audit(&user), now);
                Ok(user)
            })
            .await
    }

    /// Users holding the `owner` role.
    pub async fn get_owners(&self) -> Result<Vec<User>, AppError> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .filter(|user| user.has_role(Role::Owner))
            .collect())
    }

    /// Removes the `owner` role unless the user is the last remaining owner.
    ///
    /// The owner count is checked inside the same store cycle as the removal.
    ///
    /// # Returns
    /// - `Ok(User)` - User after the change
    /// - `Err(AppError::NotFound)` - No user with that id, or the user is not an owner
    /// - `Err(AppError::BadRequest)` - User is the last owner
    pub async fn remove_owner(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        audit: impl FnOnce(&User) -> CreateLogEntryParam,
    ) -> Result<User, AppError> {
        self.store
            .mutate(|document| {
                let owners: Vec<String> = document
                    .users
                    .iter()
                    .filter(|user| holds_role(user, Role::Owner))
                    .map(|user| user.id.clone())
                    .collect();

                if !owners.iter().any(|id| id == user_id) {
                    return Err(AppError::NotFound(format!(
                        "User {} is not an owner",
                        user_id
                    )));
                }
                if owners.len() <= 1 {
                    return Err(AppError::BadRequest(
                        "Cannot remove the last owner".to_string(),
                    ));
                }

                let user = find_mut(document, user_id)?;
                strip_role(user, Role::Owner);
                let user = User::from_entity(user.clone());
                audit_log::record(document, audit(&user), now);
                Ok(user)
            })
            .await
    }
}

/// Looks up a stored user for mutation, mapping absence to 404.
pub(super) fn find_mut<'d>(
    document: &'d mut Document,
    user_id: &str,
) -> Result<&'d mut entity::user::Model, AppError> {
    document
        .users
        .iter_mut()
        .find(|user| user.id == user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

fn holds_role(user: &entity::user::Model, role: Role) -> bool {
    user.roles
        .iter()
        .map(String::as_str)
        .chain(user.account_type.as_deref())
        .any(|name| name.trim().parse::<Role>().ok() == Some(role))
}

fn strip_role(user: &mut entity::user::Model, role: Role) {
    let name = role.to_string();
    user.roles
        .retain(|held| !held.trim().eq_ignore_ascii_case(&name));
    if user
        .account_type
        .as_deref()
        .is_some_and(|legacy| legacy.trim().eq_ignore_ascii_case(&name))
    {
        user.account_type = None;
    }
}
