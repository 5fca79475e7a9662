use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        role::Role,
        roster::{AddPlayerDto, PlayerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::roster::RosterService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping roster endpoints in OpenAPI documentation
pub static ROSTER_TAG: &str = "roster";

/// Lists the roster in the order players joined.
///
/// # Access Control
/// - `joueur` or above
///
/// # Returns
/// - `200 OK` - Roster
/// - `303 See Other` - Not logged in
/// - `403 Forbidden` - Account is suspended or banned
#[utoipa::path(
    get,
    path = "/api/roster",
    tag = ROSTER_TAG,
    responses(
        (status = 200, description = "Roster", body = Vec<PlayerDto>)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Joueur)])
        .await?;

    let players = RosterService::new(&state.store).get_all().await?;

    Ok(Json(
        players.into_iter().map(|player| player.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Adds a player to the roster.
///
/// # Access Control
/// - `manager` or above
#[utoipa::path(
    post,
    path = "/api/roster",
    tag = ROSTER_TAG,
    request_body = AddPlayerDto,
    responses(
        (status = 201, description = "Player added", body = PlayerDto),
        (status = 400, description = "Missing pseudo or position", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn add_player(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<AddPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Manager)], ip)
        .await?;

    let player = RosterService::new(&state.store)
        .add(&actor, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// Removes a player from the roster.
///
/// # Access Control
/// - `manager` or above
///
/// # Arguments
/// - `player_id` - Id of the roster entry
///
/// # Returns
/// - `204 No Content` - Player removed and audited
/// - `403 Forbidden` - Insufficient role
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    delete,
    path = "/api/roster/{player_id}",
    tag = ROSTER_TAG,
    params(("player_id" = String, Path, description = "Player id")),
    responses(
        (status = 204, description = "Player removed"),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto)
    ),
)]
pub async fn remove_player(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(player_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Manager)], ip)
        .await?;

    RosterService::new(&state.store)
        .remove(&actor, &player_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
