use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub discord_id: Option<String>,
    pub avatar: Option<String>,
    /// Roles explicitly assigned to the user.
    pub roles: Vec<Role>,
    /// Highest of the assigned roles; what authorization checks use.
    pub effective_role: Role,
    pub suspended: bool,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleChangeDto {
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddOwnerDto {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordLoginDto {
    pub username: String,
    pub password: String,
}
