use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, audit::LogEntryDto, role::Role},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::audit::AuditService,
        state::AppState,
    },
};

/// Tag for grouping audit log endpoints in OpenAPI documentation
pub static AUDIT_TAG: &str = "audit";

#[derive(Deserialize)]
pub struct LogQuery {
    pub limit: Option<usize>,
}

/// Returns the audit log, newest first.
///
/// # Access Control
/// - `administrateur` or above
#[utoipa::path(
    get,
    path = "/api/logs",
    tag = AUDIT_TAG,
    params(("limit" = Option<usize>, Query, description = "Maximum number of entries")),
    responses(
        (status = 200, description = "Audit entries", body = Vec<LogEntryDto>),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Administrateur)])
        .await?;

    let logs = AuditService::new(&state.store).get_logs(query.limit).await?;

    Ok(Json(
        logs.into_iter().map(|entry| entry.into_dto()).collect::<Vec<_>>(),
    ))
}
