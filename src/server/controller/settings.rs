use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        role::Role,
        settings::{SettingsDto, UpdateSettingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::settings::SettingsService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping club settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Returns the club settings.
///
/// # Access Control
/// - `administrateur` or above
///
/// # Returns
/// - `200 OK` - Current settings
/// - `403 Forbidden` - Insufficient role
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Club settings", body = SettingsDto),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Administrateur)])
        .await?;

    let settings = SettingsService::new(&state.store).get().await?;

    Ok(Json(settings.into_dto()))
}

/// Partially updates the club settings.
///
/// # Access Control
/// - `manager` or above
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = SettingsDto),
        (status = 400, description = "Empty club name or tag", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<UpdateSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Manager)], ip)
        .await?;

    let settings = SettingsService::new(&state.store)
        .update(&actor, payload.into())
        .await?;

    Ok(Json(settings.into_dto()))
}
