use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        communique::{CommuniqueDto, CreateCommuniqueDto},
        role::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::communique::CommuniqueService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping communiqué endpoints in OpenAPI documentation
pub static COMMUNIQUE_TAG: &str = "communique";

/// Lists published communiqués, newest first.
///
/// # Access Control
/// - `joueur` or above
///
/// # Returns
/// - `200 OK` - Communiqués
/// - `303 See Other` - Not logged in
/// - `403 Forbidden` - Account is suspended or banned
#[utoipa::path(
    get,
    path = "/api/communiques",
    tag = COMMUNIQUE_TAG,
    responses(
        (status = 200, description = "Communiqués, newest first", body = Vec<CommuniqueDto>)
    ),
)]
pub async fn get_communiques(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Joueur)])
        .await?;

    let communiques = CommuniqueService::new(&state.store, &state.bot_bridge)
        .get_all()
        .await?;

    Ok(Json(
        communiques
            .into_iter()
            .map(|communique| communique.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Publishes an announcement and forwards it to the bot.
///
/// # Access Control
/// - `moderateur` or above
#[utoipa::path(
    post,
    path = "/api/communiques",
    tag = COMMUNIQUE_TAG,
    request_body = CreateCommuniqueDto,
    responses(
        (status = 201, description = "Communiqué published", body = CommuniqueDto),
        (status = 400, description = "Missing title or content", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn publish_communique(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<CreateCommuniqueDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Moderateur)], ip)
        .await?;

    let communique = CommuniqueService::new(&state.store, &state.bot_bridge)
        .publish(&actor, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(communique.into_dto())))
}
