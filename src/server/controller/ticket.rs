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
        ticket::{OpenTicketDto, TicketDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::ticket::TicketService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping support ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// Opens a support ticket authored by the caller.
///
/// # Access Control
/// - `joueur` or above
///
/// # Arguments
/// - `payload` - Subject and message
///
/// # Returns
/// - `201 Created` - Ticket opened
/// - `400 Bad Request` - Empty subject or message
/// - `403 Forbidden` - Account is suspended or banned
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    request_body = OpenTicketDto,
    responses(
        (status = 201, description = "Ticket opened", body = TicketDto),
        (status = 400, description = "Empty subject or message", body = ErrorDto)
    ),
)]
pub async fn open_ticket(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<OpenTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Joueur)], ip)
        .await?;

    let ticket = TicketService::new(&state.store)
        .open(&actor, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// Tickets opened by the caller, newest first.
///
/// # Access Control
/// - `joueur` or above
///
/// # Returns
/// - `200 OK` - Tickets opened by the caller, newest first
#[utoipa::path(
    get,
    path = "/api/tickets/mine",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "Caller's tickets", body = Vec<TicketDto>)
    ),
)]
pub async fn get_own_tickets(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Joueur)], ip)
        .await?;

    let tickets = TicketService::new(&state.store).get_own(&actor).await?;

    Ok(Json(
        tickets.into_iter().map(|ticket| ticket.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Every ticket, newest first.
///
/// # Access Control
/// - `support` or above
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "All tickets", body = Vec<TicketDto>),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn get_all_tickets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require(&[Permission::MinimumRole(Role::Support)])
        .await?;

    let tickets = TicketService::new(&state.store).get_all().await?;

    Ok(Json(
        tickets.into_iter().map(|ticket| ticket.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Closes an open ticket.
///
/// # Access Control
/// - `support` or above
///
/// # Arguments
/// - `ticket_id` - Id of the ticket
///
/// # Returns
/// - `200 OK` - Ticket after closing
/// - `400 Bad Request` - Ticket already closed
/// - `403 Forbidden` - Insufficient role
/// - `404 Not Found` - No ticket with that id
#[utoipa::path(
    post,
    path = "/api/tickets/{ticket_id}/close",
    tag = TICKET_TAG,
    params(("ticket_id" = String, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket closed", body = TicketDto),
        (status = 400, description = "Ticket already closed", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn close_ticket(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .require_actor(&[Permission::MinimumRole(Role::Support)], ip)
        .await?;

    let ticket = TicketService::new(&state.store)
        .close(&actor, &ticket_id)
        .await?;

    Ok(Json(ticket.into_dto()))
}
