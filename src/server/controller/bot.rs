use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bot::{BotStatusDto, HeartbeatDto},
        role::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bot::status_dto,
        service::bot::BotService,
        state::AppState,
    },
};

/// Tag for grouping bot endpoints in OpenAPI documentation
pub static BOT_TAG: &str = "bot";

/// Liveness report from the bot process.
///
/// Authenticated by the shared secret in the body, not by session. Every
/// field other than `secret` is stored verbatim and echoed by `get_status`.
///
/// # Access Control
/// - Bot shared secret in the body; no session
///
/// # Returns
/// - `204 No Content` - Heartbeat recorded
/// - `401 Unauthorized` - Secret mismatch
#[utoipa::path(
    post,
    path = "/api/bot/heartbeat",
    tag = BOT_TAG,
    request_body = HeartbeatDto,
    responses(
        (status = 204, description = "Heartbeat recorded"),
        (status = 401, description = "Invalid secret", body = ErrorDto)
    ),
)]
pub async fn heartbeat(
    State(state): State<AppState>,
    Json(payload): Json<HeartbeatDto>,
) -> Result<impl IntoResponse, AppError> {
    BotService::new(&state.bot_status, &state.bot_shared_secret)
        .heartbeat(payload)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns whether the bot is online and the fields of its last heartbeat.
///
/// The bot counts as online when its last heartbeat is less than 30 seconds old.
///
/// # Access Control
/// - `joueur` or above
///
/// # Returns
/// - `200 OK` - Bot status; offline with no fields if no heartbeat was received
/// - `303 See Other` - Not logged in
/// - `403 Forbidden` - Account is suspended or banned
#[utoipa::path(
    get,
    path = "/api/bot/status",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Bot status", body = BotStatusDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Joueur)])
        .await?;

    let status = BotService::new(&state.bot_status, &state.bot_shared_secret)
        .status()
        .await;

    Ok(Json(status_dto(status, Utc::now())))
}
