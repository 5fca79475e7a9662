//! User factory for creating test user records.

use crate::factory::helpers::next_id;
use chrono::Utc;

/// Factory for stored users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new()
///     .username("Capitaine")
///     .roles(&["capitaine"])
///     .build();
/// ```
pub struct UserFactory {
    model: entity::user::Model,
}

impl UserFactory {
    /// Creates a factory with default values.
    ///
    /// Defaults:
    /// - id and discord_id: same auto-incremented snowflake
    /// - username: `"User {id}"`
    /// - roles: `["joueur"]`
    /// - not suspended, not banned, no password
    pub fn new() -> Self {
        let id = next_id().to_string();
        Self {
            model: entity::user::Model {
                id: id.clone(),
                username: format!("User {}", id),
                password_hash: None,
                roles: vec!["joueur".to_string()],
                account_type: None,
                discord_id: Some(id),
                avatar: None,
                created_at: Utc::now(),
                last_login_at: None,
                suspended: false,
                banned: false,
            },
        }
    }

    /// Sets both the store id and the Discord id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.model.discord_id = Some(id.clone());
        self.model.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.model.username = username.into();
        self
    }

    /// Replaces the role list. Names are stored verbatim, unknown ones included.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.model.roles = roles.iter().map(|role| role.to_string()).collect();
        self
    }

    /// Sets the legacy single-role field.
    pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
        self.model.account_type = Some(account_type.into());
        self
    }

    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.model.password_hash = Some(hash.into());
        self
    }

    pub fn discord_id(mut self, discord_id: Option<&str>) -> Self {
        self.model.discord_id = discord_id.map(str::to_string);
        self
    }

    pub fn suspended(mut self, suspended: bool) -> Self {
        self.model.suspended = suspended;
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.model.banned = banned;
        self
    }

    pub fn build(self) -> entity::user::Model {
        self.model
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a user holding a single role.
pub fn with_role(role: &str) -> entity::user::Model {
    UserFactory::new().roles(&[role]).build()
}
