mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    scheduler::sanction_expiry,
    service::bot::BotStatusTracker,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let store = startup::open_store(&config).await?;
    let session = startup::setup_session(&config);
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let bot_bridge = startup::start_bot_bridge(&config, http_client.clone());

    // Kept alive for the lifetime of the server.
    let _scheduler = sanction_expiry::start_scheduler(store.clone()).await?;

    let state = AppState {
        store,
        http_client,
        oauth_client,
        bot_bridge,
        bot_status: BotStatusTracker::new(),
        bot_shared_secret: config.bot_shared_secret.as_str().into(),
        super_admin_id: config.super_admin_discord_id.as_deref().map(Into::into),
        app_url: config.app_url.clone(),
        trust_forwarded_for: config.trust_forwarded_for,
    };

    let app = server::router::router().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
