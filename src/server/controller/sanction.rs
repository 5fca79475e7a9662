use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        role::Role,
        sanction::{IssueSanctionDto, SanctionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::sanction::SanctionService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping sanction endpoints in OpenAPI documentation
pub static SANCTION_TAG: &str = "sanction";

#[derive(Deserialize)]
pub struct SanctionQuery {
    /// Restricts the listing to one user.
    pub user_id: Option<String>,
}

/// Lists sanctions, newest first, optionally for a single user.
///
/// # Access Control
/// - `moderateur` or above
///
/// # Arguments
/// - `query` - Optional `user_id` filter
///
/// # Returns
/// - `200 OK` - Sanctions
/// - `403 Forbidden` - Insufficient role
#[utoipa::path(
    get,
    path = "/api/sanctions",
    tag = SANCTION_TAG,
    params(("user_id" = Option<String>, Query, description = "Only sanctions of this user")),
    responses(
        (status = 200, description = "Sanctions, newest first", body = Vec<SanctionDto>),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn get_sanctions(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SanctionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Moderateur)])
        .await?;

    let sanctions = SanctionService::new(&state.store)
        .get_sanctions(query.user_id.as_deref())
        .await?;

    Ok(Json(
        sanctions
            .into_iter()
            .map(|sanction| sanction.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Issues a warning, suspension or ban.
///
/// # Access Control
/// - `moderateur` or above, and the target's effective role must rank strictly
///   below the caller's
///
/// # Returns
/// - `201 Created` - Sanction issued
/// - `400 Bad Request` - Empty reason or non-positive duration
/// - `403 Forbidden` - Insufficient role or target not outranked
/// - `404 Not Found` - Target user does not exist
#[utoipa::path(
    post,
    path = "/api/sanctions",
    tag = SANCTION_TAG,
    request_body = IssueSanctionDto,
    responses(
        (status = 201, description = "Sanction issued", body = SanctionDto),
        (status = 400, description = "Invalid sanction", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn issue_sanction(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<IssueSanctionDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Moderateur)], ip)
        .await?;

    let sanction = SanctionService::new(&state.store)
        .issue(&actor, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(sanction.into_dto())))
}

/// Lifts an active sanction and clears the user's flag when none remain.
///
/// # Access Control
/// - `moderateur` or above, and the sanctioned user must rank strictly below
///   the caller (super admin exempt)
///
/// # Arguments
/// - `sanction_id` - Id of the sanction to lift
///
/// # Returns
/// - `200 OK` - Sanction after lifting
/// - `400 Bad Request` - Sanction already inactive
/// - `403 Forbidden` - Insufficient role or target not outranked
/// - `404 Not Found` - No sanction with that id
#[utoipa::path(
    post,
    path = "/api/sanctions/{sanction_id}/lift",
    tag = SANCTION_TAG,
    params(("sanction_id" = String, Path, description = "Sanction id")),
    responses(
        (status = 200, description = "Sanction lifted", body = SanctionDto),
        (status = 400, description = "Sanction already inactive", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Sanction not found", body = ErrorDto)
    ),
)]
pub async fn lift_sanction(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(sanction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Moderateur)], ip)
        .await?;

    let sanction = SanctionService::new(&state.store)
        .lift(&actor, &sanction_id)
        .await?;

    Ok(Json(sanction.into_dto()))
}
