//! Request authorization against the role hierarchy.
//!
//! `AuthGuard` resolves the session user from the store on every call, so role
//! changes and sanctions take effect on the user's next request.

use tower_sessions::Session;

use crate::{
    model::role::Role,
    server::{
        data::{store::JsonStore, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::{audit::Actor, user::User},
    },
};

/// Requirement checked by `AuthGuard::require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Effective role must rank at least this high.
    MinimumRole(Role),
    /// Adding, removing or listing owners: `owner` role or the super admin.
    OwnerManagement,
}

pub struct AuthGuard<'a> {
    store: &'a JsonStore,
    session: &'a Session,
    /// Discord id of the configured super admin, if any.
    super_admin_id: Option<&'a str>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        store: &'a JsonStore,
        session: &'a Session,
        super_admin_id: Option<&'a str>,
    ) -> Self {
        Self {
            store,
            session,
            super_admin_id,
        }
    }

    /// Resolves the user behind the session without checking any permission.
    ///
    /// A session pointing at a user the store no longer holds is cleared.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user, freshly loaded
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInStore)` - Session user no longer exists
    pub async fn current_user(&self) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.store).find_by_id(&user_id).await? else {
            auth_session.clear().await;
            return Err(AuthError::UserNotInStore(user_id).into());
        };

        Ok(user)
    }

    /// Resolves the session user and checks every permission in order.
    ///
    /// Banned and suspended accounts are refused before any permission is
    /// evaluated; the super admin is exempt from that check.
    ///
    /// # Returns
    /// - `Ok(User)` - All permissions satisfied
    /// - `Err(AuthError::AccountBanned | AccountSuspended)` - Account is sanctioned
    /// - `Err(AuthError::AccessDenied)` - First permission not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user = self.current_user().await?;
        let super_admin = self.is_super_admin(&user);

        if !super_admin {
            if user.banned {
                return Err(AuthError::AccountBanned(user.id).into());
            }
            if user.suspended {
                return Err(AuthError::AccountSuspended(user.id).into());
            }
        }

        for permission in permissions {
            match permission {
                Permission::MinimumRole(minimum) => {
                    if !user.effective_role.satisfies(*minimum) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "effective role {} is below required role {}",
                                user.effective_role, minimum
                            ),
                        )
                        .into());
                    }
                }
                Permission::OwnerManagement => {
                    if !super_admin && user.effective_role != Role::Owner {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "owner management requires the owner role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Whether `user` is the configured super admin.
    pub fn is_super_admin(&self, user: &User) -> bool {
        self.super_admin_id.is_some_and(|super_admin_id| {
            user.id == super_admin_id || user.discord_id.as_deref() == Some(super_admin_id)
        })
    }

    /// Checks `permissions` and returns the caller as an `Actor` tagged with `ip`.
    pub async fn require_actor(
        &self,
        permissions: &[Permission],
        ip: String,
    ) -> Result<Actor, AppError> {
        let user = self.require(permissions).await?;
        Ok(self.actor(&user, ip))
    }

    /// Builds the service-layer view of an authorized user.
    pub fn actor(&self, user: &User, ip: String) -> Actor {
        Actor {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.effective_role,
            super_admin: self.is_super_admin(user),
            ip,
        }
    }
}
