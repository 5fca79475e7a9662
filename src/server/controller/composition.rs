use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        composition::{CompositionDto, CreateCompositionDto},
        role::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::composition::CompositionService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping composition endpoints in OpenAPI documentation
pub static COMPOSITION_TAG: &str = "composition";

/// Lists published compositions, newest first.
///
/// # Access Control
/// - `joueur` or above
///
/// # Returns
/// - `200 OK` - Compositions
/// - `303 See Other` - Not logged in
/// - `403 Forbidden` - Account is suspended or banned
#[utoipa::path(
    get,
    path = "/api/compositions",
    tag = COMPOSITION_TAG,
    responses(
        (status = 200, description = "Published compositions, newest first", body = Vec<CompositionDto>)
    ),
)]
pub async fn get_compositions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Joueur)])
        .await?;

    let compositions = CompositionService::new(&state.store, &state.bot_bridge)
        .get_all()
        .await?;

    Ok(Json(
        compositions
            .into_iter()
            .map(|composition| composition.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Publishes a line-up and forwards it to the bot.
///
/// # Access Control
/// - `support` or above
///
/// # Returns
/// - `201 Created` - Composition stored, bot notification enqueued
/// - `400 Bad Request` - Missing match label or no players
/// - `403 Forbidden` - Insufficient role
#[utoipa::path(
    post,
    path = "/api/compositions",
    tag = COMPOSITION_TAG,
    request_body = CreateCompositionDto,
    responses(
        (status = 201, description = "Composition published", body = CompositionDto),
        (status = 400, description = "Invalid composition", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn publish_composition(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<CreateCompositionDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Support)], ip)
        .await?;

    let composition = CompositionService::new(&state.store, &state.bot_bridge)
        .publish(&actor, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(composition.into_dto())))
}
