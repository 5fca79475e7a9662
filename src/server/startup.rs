//! Construction of the long-lived resources held in `AppState`.

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use std::time::Duration as StdDuration;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{
    config::Config,
    data::store::JsonStore,
    error::{config::ConfigError, AppError},
    service::bot::{BotBridge, BotDispatcher},
    state::OAuth2Client,
};

/// Timeout applied to every outbound HTTP request.
const HTTP_TIMEOUT: StdDuration = StdDuration::from_secs(10);

/// Opens the JSON store and loads it once.
///
/// Loading up front creates the default document on first start and surfaces
/// an unwritable data directory before the server accepts requests.
pub async fn open_store(config: &Config) -> Result<JsonStore, AppError> {
    let store = JsonStore::new(config.data_file.clone(), config.bootstrap.clone());
    let document = store.load().await?;

    tracing::info!(
        "Loaded store {} ({} users, {} log entries)",
        store.path().display(),
        document.users.len(),
        document.logs.len()
    );

    Ok(store)
}

/// Session layer backed by the in-memory store.
///
/// Sessions expire after 7 days of inactivity and do not survive a restart.
/// `SameSite=Lax` keeps the cookie on the redirect back from Discord.
pub fn setup_session(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// HTTP client for Discord and bot requests.
///
/// Redirects are disabled so a response can never point the server at an
/// arbitrary host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(|e| {
            invalid_url("DISCORD_AUTH_URL", e)
        })?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(|e| {
            invalid_url("DISCORD_TOKEN_URL", e)
        })?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(|e| invalid_url("DISCORD_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Creates the bot bridge and spawns its dispatcher task.
pub fn start_bot_bridge(config: &Config, http_client: reqwest::Client) -> BotBridge {
    let (bridge, receiver) = BotBridge::channel();

    if config.bot_webhook_url.is_none() {
        tracing::info!("BOT_WEBHOOK_URL not set, bot notifications will be dropped");
    }

    BotDispatcher::new(
        http_client,
        config.bot_webhook_url.clone(),
        config.bot_shared_secret.clone(),
    )
    .spawn(receiver);

    bridge
}

fn invalid_url(var: &str, error: url::ParseError) -> AppError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        reason: error.to_string(),
    }
    .into()
}
