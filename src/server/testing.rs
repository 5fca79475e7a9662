//! Shared fixtures for unit and endpoint tests.

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use std::sync::Arc;
use test_utils::context::TestContext;
use tokio::sync::mpsc::UnboundedReceiver;
use tower_sessions::Session;

use crate::server::{
    config::BootstrapAccount,
    data::store::JsonStore,
    error::AppError,
    middleware::session::AuthSession,
    model::{audit::Actor, bot::BotNotification, user::User},
    service::bot::{BotBridge, BotStatusTracker},
    state::{AppState, OAuth2Client},
};

pub const BOOTSTRAP_ID: &str = "999999999999999999";
pub const SUPER_ADMIN_ID: &str = "888888888888888888";
pub const BOT_SECRET: &str = "bot-secret";
pub const CLIENT_IP: &str = "203.0.113.7";

pub fn bootstrap_account() -> BootstrapAccount {
    BootstrapAccount {
        discord_id: BOOTSTRAP_ID.to_string(),
        username: "owner".to_string(),
        password_hash: None,
    }
}

/// Opens a store on the context's data file.
pub fn store(test: &TestContext) -> JsonStore {
    JsonStore::new(test.data_path(), bootstrap_account())
}

pub fn oauth_client() -> OAuth2Client {
    BasicClient::new(ClientId::new("client-id".to_string()))
        .set_client_secret(ClientSecret::new("client-secret".to_string()))
        .set_auth_uri(AuthUrl::new("https://example.com/oauth2/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new("https://example.com/oauth2/token".to_string()).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("https://panel.example.com/api/auth/callback".to_string()).unwrap(),
        )
}

/// Builds an `AppState` around `store` with `SUPER_ADMIN_ID` configured.
///
/// The returned receiver is the far end of the bot bridge; tests read it to
/// observe notifications instead of running the dispatcher.
pub fn app_state(store: JsonStore) -> (AppState, UnboundedReceiver<BotNotification>) {
    let (bot_bridge, receiver) = BotBridge::channel();

    let state = AppState {
        store,
        http_client: reqwest::Client::new(),
        oauth_client: oauth_client(),
        bot_bridge,
        bot_status: BotStatusTracker::new(),
        bot_shared_secret: Arc::from(BOT_SECRET),
        super_admin_id: Some(Arc::from(SUPER_ADMIN_ID)),
        app_url: "https://panel.example.com".to_string(),
        trust_forwarded_for: false,
    };

    (state, receiver)
}

/// Marks `session` as authenticated for `user`.
pub async fn login_as(session: &Session, user: &entity::user::Model) -> Result<(), AppError> {
    AuthSession::new(session).set_user_id(&user.id).await
}

/// Service-layer view of `user`, as `AuthGuard` would build it.
pub fn actor(user: &entity::user::Model) -> Actor {
    Actor {
        id: user.id.clone(),
        username: user.username.clone(),
        role: User::from_entity(user.clone()).effective_role,
        super_admin: false,
        ip: CLIENT_IP.to_string(),
    }
}
