//! User domain models and parameters.
//!
//! Stored users carry role names as strings. Conversion into the domain model
//! resolves them against the role hierarchy once, so the rest of the server only
//! handles typed roles and a precomputed effective role.

use chrono::{DateTime, Utc};

use crate::model::{role::Role, user::UserDto};

/// User with resolved roles and moderation flags.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub discord_id: Option<String>,
    pub avatar: Option<String>,
    /// Recognised roles from both the role list and the legacy account type,
    /// sorted ascending and deduplicated.
    pub roles: Vec<Role>,
    /// Highest of `roles`, or the default role when none is assigned.
    pub effective_role: Role,
    /// Argon2 PHC string for password login, if the account has one.
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub suspended: bool,
    pub banned: bool,
}

impl User {
    /// Converts a stored user into the domain model.
    ///
    /// Unknown role names are skipped with a warning rather than failing the
    /// conversion, so a single bad entry never locks an account out.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let names = entity
            .roles
            .iter()
            .map(String::as_str)
            .chain(entity.account_type.as_deref());

        let mut roles = Vec::new();
        for name in names {
            match name.trim().parse::<Role>() {
                Ok(role) => roles.push(role),
                Err(_) => tracing::warn!("Ignoring unknown role '{}' on user {}", name, entity.id),
            }
        }
        roles.sort();
        roles.dedup();

        let effective_role = roles.last().copied().unwrap_or(Role::DEFAULT);

        Self {
            id: entity.id,
            username: entity.username,
            discord_id: entity.discord_id,
            avatar: entity.avatar,
            roles,
            effective_role,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
            suspended: entity.suspended,
            banned: entity.banned,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            discord_id: self.discord_id,
            avatar: self.avatar,
            roles: self.roles,
            effective_role: self.effective_role,
            suspended: self.suspended,
            banned: self.banned,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Profile returned by the identity provider after a successful OAuth exchange.
#[derive(Debug, Clone)]
pub struct UpsertDiscordUserParam {
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
}

/// Grant or revoke of a single role.
#[derive(Debug, Clone)]
pub struct RoleChangeParam {
    pub user_id: String,
    pub role: Role,
}
