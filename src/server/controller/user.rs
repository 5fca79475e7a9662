use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        role::Role,
        user::{RoleChangeDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::RoleChangeParam,
        service::user::UserService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Lists every user with their effective role.
///
/// # Access Control
/// - `moderateur` or above
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Moderateur)])
        .await?;

    let users = UserService::new(&state.store).get_all_users().await?;

    Ok(Json(
        users.into_iter().map(|user| user.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Returns a single user with their effective role.
///
/// # Access Control
/// - `moderateur` or above
///
/// # Returns
/// - `200 OK` - User
/// - `403 Forbidden` - Insufficient role
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Moderateur)])
        .await?;

    let user = UserService::new(&state.store).get_user(&user_id).await?;

    Ok(Json(user.into_dto()))
}

/// Grants a role to a user.
///
/// # Access Control
/// - `administrateur` or above, and the granted role must rank strictly below
///   the caller's effective role. `owner` is rejected; use the owner endpoints.
///
/// # Returns
/// - `200 OK` - User after the grant
/// - `400 Bad Request` - Role is `owner`
/// - `403 Forbidden` - Insufficient role
/// - `404 Not Found` - No such user
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/roles",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    request_body = RoleChangeDto,
    responses(
        (status = 200, description = "Role granted", body = UserDto),
        (status = 400, description = "Owner role cannot be granted here", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn grant_role(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(user_id): Path<String>,
    Json(payload): Json<RoleChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Administrateur)], ip)
        .await?;

    let user = UserService::new(&state.store)
        .grant_role(
            &actor,
            RoleChangeParam {
                user_id,
                role: payload.role,
            },
        )
        .await?;

    Ok(Json(user.into_dto()))
}

/// Revokes a role from a user.
///
/// # Access Control
/// - `administrateur` or above, and the role must rank strictly below the
///   caller's effective role (super admin exempt)
///
/// # Returns
/// - `200 OK` - User after the change
/// - `400 Bad Request` - Role is `owner`
/// - `403 Forbidden` - Insufficient role
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/roles/{role}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User id"),
        ("role" = Role, Path, description = "Role to revoke")
    ),
    responses(
        (status = 200, description = "Role revoked", body = UserDto),
        (status = 400, description = "Owner role cannot be revoked here", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn revoke_role(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path((user_id, role)): Path<(String, Role)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Administrateur)], ip)
        .await?;

    let user = UserService::new(&state.store)
        .revoke_role(&actor, RoleChangeParam { user_id, role })
        .await?;

    Ok(Json(user.into_dto()))
}
