use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{AddOwnerDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

/// Lists users holding the `owner` role.
///
/// # Access Control
/// - `owner`, or the configured super admin
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Owners", body = Vec<UserDto>),
        (status = 403, description = "Not an owner", body = ErrorDto)
    ),
)]
pub async fn get_owners(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::OwnerManagement])
        .await?;

    let owners = UserService::new(&state.store).get_owners().await?;

    Ok(Json(
        owners.into_iter().map(|user| user.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Grants the `owner` role to an existing user.
///
/// # Access Control
/// - `owner` or the configured super admin
///
/// # Arguments
/// - `payload` - Id of the user to promote
///
/// # Returns
/// - `200 OK` - User after the grant
/// - `403 Forbidden` - Caller is neither owner nor super admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    post,
    path = "/api/owners",
    tag = OWNER_TAG,
    request_body = AddOwnerDto,
    responses(
        (status = 200, description = "Owner added", body = UserDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn add_owner(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<AddOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::OwnerManagement], ip)
        .await?;

    let user = UserService::new(&state.store)
        .add_owner(&actor, &payload.user_id)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Removes the `owner` role from a user.
///
/// # Returns
/// - `200 OK` - User after the removal
/// - `400 Bad Request` - User is the last owner
/// - `403 Forbidden` - Not an owner
/// - `404 Not Found` - No such user, or the user is not an owner
#[utoipa::path(
    delete,
    path = "/api/owners/{user_id}",
    tag = OWNER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Owner removed", body = UserDto),
        (status = 400, description = "Last owner", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "Not an owner", body = ErrorDto)
    ),
)]
pub async fn remove_owner(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::OwnerManagement], ip)
        .await?;

    let user = UserService::new(&state.store)
        .remove_owner(&actor, &user_id)
        .await?;

    Ok(Json(user.into_dto()))
}
