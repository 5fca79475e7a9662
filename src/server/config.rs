use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATA_FILE: &str = "data/panel.json";
const DEFAULT_BOOTSTRAP_USERNAME: &str = "owner";

/// Privileged account seeded into a freshly created store document.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapAccount {
    /// Discord id of the account, also used as its store id.
    pub discord_id: String,
    pub username: String,
    /// Argon2 PHC string enabling password login for this account.
    pub password_hash: Option<String>,
}

pub struct Config {
    pub bind_addr: String,
    pub data_file: PathBuf,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Base URL of the bot process; notifications are dropped when unset.
    pub bot_webhook_url: Option<String>,
    pub bot_shared_secret: String,

    /// Identity allowed to manage owners regardless of its stored role.
    pub super_admin_discord_id: Option<String>,

    /// Take client addresses from `X-Forwarded-For`; only safe behind a proxy
    /// that overwrites the header.
    pub trust_forwarded_for: bool,

    pub bootstrap: BootstrapAccount,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bootstrap_discord_id = required("BOOTSTRAP_DISCORD_ID")?;
        if bootstrap_discord_id.parse::<u64>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "BOOTSTRAP_DISCORD_ID".to_string(),
                reason: "expected a Discord snowflake".to_string(),
            }
            .into());
        }

        Ok(Self {
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            data_file: optional("DATA_FILE")
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
                .into(),
            app_url: required("APP_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            bot_webhook_url: optional("BOT_WEBHOOK_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            bot_shared_secret: required("BOT_SHARED_SECRET")?,
            super_admin_discord_id: optional("SUPER_ADMIN_DISCORD_ID"),
            trust_forwarded_for: flag("TRUST_FORWARDED_FOR")?,
            bootstrap: BootstrapAccount {
                discord_id: bootstrap_discord_id,
                username: optional("BOOTSTRAP_USERNAME")
                    .unwrap_or_else(|| DEFAULT_BOOTSTRAP_USERNAME.to_string()),
                password_hash: optional("BOOTSTRAP_PASSWORD_HASH"),
            },
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Reads a boolean variable; unset means `false`.
fn flag(var: &str) -> Result<bool, ConfigError> {
    match optional(var) {
        None => Ok(false),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
