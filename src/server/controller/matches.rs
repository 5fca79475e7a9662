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
        matches::{CreateMatchDto, MatchDto, UpdateMatchDto},
        role::Role,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::matches::MatchService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

/// Lists matches in scheduled order.
///
/// # Access Control
/// - `joueur` or above
///
/// # Returns
/// - `200 OK` - Matches, earliest first
/// - `403 Forbidden` - Account is suspended or banned
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Matches", body = Vec<MatchDto>)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Joueur)])
        .await?;

    let matches = MatchService::new(&state.store).get_all().await?;

    Ok(Json(
        matches.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Schedules a match.
///
/// # Access Control
/// - `capitaine` or above
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match created", body = MatchDto),
        (status = 400, description = "Missing opponent", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Capitaine)], ip)
        .await?;

    let created = MatchService::new(&state.store)
        .create(&actor, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Partially updates a match; omitted fields keep their value.
///
/// # Access Control
/// - `capitaine` or above
///
/// # Arguments
/// - `match_id` - Id of the match
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Match after the update
/// - `400 Bad Request` - Opponent provided but empty
/// - `403 Forbidden` - Insufficient role
/// - `404 Not Found` - No match with that id
#[utoipa::path(
    put,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(("match_id" = String, Path, description = "Match id")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Empty opponent", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(match_id): Path<String>,
    Json(payload): Json<UpdateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Capitaine)], ip)
        .await?;

    let updated = MatchService::new(&state.store)
        .update(&actor, &match_id, payload.into())
        .await?;

    Ok(Json(updated.into_dto()))
}

/// Deletes a match from the calendar.
///
/// # Access Control
/// - `capitaine` or above
///
/// # Arguments
/// - `match_id` - Id of the match to delete
///
/// # Returns
/// - `204 No Content` - Match deleted and audited
/// - `403 Forbidden` - Insufficient role
/// - `404 Not Found` - No match with that id
#[utoipa::path(
    delete,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(("match_id" = String, Path, description = "Match id")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(match_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Capitaine)], ip)
        .await?;

    MatchService::new(&state.store)
        .delete(&actor, &match_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
