//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through axum's
//! state extraction. Every field is cheap to clone.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::server::{
    data::store::JsonStore,
    service::bot::{BotBridge, BotStatusTracker},
};

/// OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Handle to the JSON document; clones share one lock.
    pub store: JsonStore,

    /// HTTP client for Discord API calls. Does not follow redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Queue feeding the bot notification dispatcher.
    pub bot_bridge: BotBridge,

    /// Last heartbeat received from the bot.
    pub bot_status: BotStatusTracker,

    /// Secret the bot must present on heartbeats.
    pub bot_shared_secret: Arc<str>,

    /// Discord id allowed to manage owners regardless of stored role.
    pub super_admin_id: Option<Arc<str>>,

    /// Front-end URL users are sent back to after login and logout.
    pub app_url: String,

    /// Whether `ClientIp` honours `X-Forwarded-For`.
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn super_admin_id(&self) -> Option<&str> {
        self.super_admin_id.as_deref()
    }
}
