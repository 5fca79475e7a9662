//! Login flows: Discord OAuth2 and password login for the bootstrap account.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use chrono::Utc;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::{store::JsonStore, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        audit::{AuditAction, CreateLogEntryParam},
        user::{UpsertDiscordUserParam, User},
    },
    state::OAuth2Client,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Service for authenticating users.
///
/// Resolves a Discord identity or a username/password pair to a stored user.
/// Session handling stays in the controller.
pub struct AuthService<'a> {
    store: &'a JsonStore,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        store: &'a JsonStore,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            store,
            http_client,
            oauth_client,
        }
    }

    /// Generates the Discord authorization URL and its CSRF state.
    ///
    /// Only the `identify` scope is requested.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Completes the OAuth2 flow and resolves the local user.
    ///
    /// Creates the user on first login; refreshes username and avatar
    /// otherwise. Roles are never changed here. Accounts allowed in get their
    /// last login stamped and a `login` entry from `ip` in one store cycle.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AuthError::TokenExchange)` - Discord rejected the authorization code
    /// - `Err(AuthError::ProfileFetch)` - Profile could not be fetched with the token
    /// - `Err(AuthError::AccountBanned)` - User is banned
    pub async fn callback(&self, authorization_code: String, ip: &str) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self.fetch_discord_user(&token).await?;

        let user_repo = UserRepository::new(self.store);
        let (user, created) = user_repo
            .upsert_discord(
                UpsertDiscordUserParam {
                    discord_id: profile.id.get().to_string(),
                    username: profile.name,
                    avatar: profile.avatar.map(|hash| hash.to_string()),
                },
                Utc::now(),
            )
            .await?;

        if created {
            tracing::info!("Created user {} ({}) on first login", user.username, user.id);
        }

        if user.banned {
            return Err(AuthError::AccountBanned(user.id).into());
        }

        user_repo
            .record_login(&user.id, Utc::now(), |user| login_entry(user, ip))
            .await
    }

    /// Verifies a username and password against the stored Argon2 hash.
    ///
    /// Unknown users, accounts without a password and wrong passwords all
    /// produce the same error. A successful login is recorded like `callback`.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Credentials rejected
    /// - `Err(AuthError::AccountBanned)` - User is banned
    pub async fn password_login(
        &self,
        username: &str,
        password: &str,
        ip: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.store);

        let Some(user) = user_repo.find_by_username(username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let verified = user
            .password_hash
            .as_deref()
            .is_some_and(|hash| verify_password(hash, password));
        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.banned {
            return Err(AuthError::AccountBanned(user.id).into());
        }

        user_repo
            .record_login(&user.id, Utc::now(), |user| login_entry(user, ip))
            .await
    }

    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(DISCORD_USER_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;

        let user = response
            .json::<DiscordUser>()
            .await
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;

        Ok(user)
    }
}

fn login_entry(user: &User, ip: &str) -> CreateLogEntryParam {
    CreateLogEntryParam::new(AuditAction::Login, &user.username, ip).target(&user.id)
}

/// Checks `password` against an Argon2 PHC string. Malformed hashes never verify.
fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::error!("Stored password hash is not a valid PHC string: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHasher, SaltString};
    use test_utils::{builder::TestBuilder, factory::user::UserFactory};

    use crate::server::testing::{oauth_client, store};

    fn hash(password: &str) -> String {
        let salt = SaltString::from_b64("c29tZXNhbHR2YWx1ZQ").unwrap();
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn password_login_accepts_matching_hash() -> Result<(), AppError> {
        let user = UserFactory::new()
            .username("owner")
            .password_hash(hash("correct horse"))
            .build();
        let test = TestBuilder::new().with_user(user.clone()).build().unwrap();
        let store = store(&test);
        let http_client = reqwest::Client::new();
        let oauth_client = oauth_client();
        let service = AuthService::new(&store, &http_client, &oauth_client);

        let logged_in = service
            .password_login("Owner", "correct horse", "198.51.100.4")
            .await?;

        assert_eq!(logged_in.id, user.id);
        assert!(logged_in.last_login_at.is_some());

        let document = test.read_document().unwrap();
        assert_eq!(document.logs.len(), 1);
        assert_eq!(document.logs[0].action, "login");
        assert_eq!(document.logs[0].executor, "owner");
        assert_eq!(document.logs[0].ip, "198.51.100.4");

        Ok(())
    }

    #[tokio::test]
    async fn password_login_rejects_bad_credentials() -> Result<(), AppError> {
        let with_password = UserFactory::new()
            .username("owner")
            .password_hash(hash("correct horse"))
            .build();
        let without_password = UserFactory::new().username("player").build();
        let test = TestBuilder::new()
            .with_users([with_password, without_password])
            .build()
            .unwrap();
        let store = store(&test);
        let http_client = reqwest::Client::new();
        let oauth_client = oauth_client();
        let service = AuthService::new(&store, &http_client, &oauth_client);

        for (username, password) in [("owner", "wrong"), ("player", ""), ("ghost", "x")] {
            let result = service.password_login(username, password, "127.0.0.1").await;
            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));
        }
        assert!(test.read_document().unwrap().logs.is_empty());

        Ok(())
    }

    #[test]
    fn login_url_requests_identify_scope_only() {
        let test = TestBuilder::new().build().unwrap();
        let store = store(&test);
        let http_client = reqwest::Client::new();
        let oauth_client = oauth_client();
        let service = AuthService::new(&store, &http_client, &oauth_client);

        let (url, csrf) = service.login_url();

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(query.contains(&("scope".to_string(), "identify".to_string())));
        assert!(query.contains(&("state".to_string(), csrf.secret().clone())));
    }
}
