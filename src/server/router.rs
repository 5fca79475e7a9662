use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        audit::LogEntryDto,
        bot::{BotStatusDto, HeartbeatDto},
        communique::{CommuniqueDto, CreateCommuniqueDto},
        composition::{CompositionDto, CreateCompositionDto},
        matches::{CreateMatchDto, MatchDto, UpdateMatchDto},
        role::Role,
        roster::{AddPlayerDto, PlayerDto},
        sanction::{IssueSanctionDto, SanctionDto},
        settings::{SettingsDto, UpdateSettingsDto},
        ticket::{OpenTicketDto, TicketDto},
        user::{AddOwnerDto, PasswordLoginDto, RoleChangeDto, UserDto},
    },
    server::{
        controller::{
            audit, auth, bot, communique, composition, matches, owner, roster, sanction,
            settings, ticket, user,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Club panel API"),
    paths(
        auth::login,
        auth::callback,
        auth::password_login,
        auth::logout,
        auth::get_user,
        user::get_users,
        user::get_user_by_id,
        user::grant_role,
        user::revoke_role,
        owner::get_owners,
        owner::add_owner,
        owner::remove_owner,
        audit::get_logs,
        bot::heartbeat,
        bot::get_status,
        sanction::get_sanctions,
        sanction::issue_sanction,
        sanction::lift_sanction,
        ticket::open_ticket,
        ticket::get_own_tickets,
        ticket::get_all_tickets,
        ticket::close_ticket,
        matches::get_matches,
        matches::create_match,
        matches::update_match,
        matches::delete_match,
        composition::get_compositions,
        composition::publish_composition,
        communique::get_communiques,
        communique::publish_communique,
        roster::get_roster,
        roster::add_player,
        roster::remove_player,
        settings::get_settings,
        settings::update_settings,
    ),
    components(schemas(
        ErrorDto,
        Role,
        UserDto,
        RoleChangeDto,
        AddOwnerDto,
        PasswordLoginDto,
        LogEntryDto,
        BotStatusDto,
        HeartbeatDto,
        SanctionDto,
        IssueSanctionDto,
        TicketDto,
        OpenTicketDto,
        MatchDto,
        CreateMatchDto,
        UpdateMatchDto,
        CompositionDto,
        CreateCompositionDto,
        CommuniqueDto,
        CreateCommuniqueDto,
        PlayerDto,
        AddPlayerDto,
        SettingsDto,
        UpdateSettingsDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/password", post(auth::password_login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/users", get(user::get_users))
        .route("/api/users/{user_id}", get(user::get_user_by_id))
        .route("/api/users/{user_id}/roles", post(user::grant_role))
        .route("/api/users/{user_id}/roles/{role}", delete(user::revoke_role))
        .route("/api/owners", get(owner::get_owners).post(owner::add_owner))
        .route("/api/owners/{user_id}", delete(owner::remove_owner))
        .route("/api/logs", get(audit::get_logs))
        .route("/api/bot/heartbeat", post(bot::heartbeat))
        .route("/api/bot/status", get(bot::get_status))
        .route(
            "/api/sanctions",
            get(sanction::get_sanctions).post(sanction::issue_sanction),
        )
        .route("/api/sanctions/{sanction_id}/lift", post(sanction::lift_sanction))
        .route(
            "/api/tickets",
            get(ticket::get_all_tickets).post(ticket::open_ticket),
        )
        .route("/api/tickets/mine", get(ticket::get_own_tickets))
        .route("/api/tickets/{ticket_id}/close", post(ticket::close_ticket))
        .route(
            "/api/matches",
            get(matches::get_matches).post(matches::create_match),
        )
        .route(
            "/api/matches/{match_id}",
            put(matches::update_match).delete(matches::delete_match),
        )
        .route(
            "/api/compositions",
            get(composition::get_compositions).post(composition::publish_composition),
        )
        .route(
            "/api/communiques",
            get(communique::get_communiques).post(communique::publish_communique),
        )
        .route("/api/roster", get(roster::get_roster).post(roster::add_player))
        .route("/api/roster/{player_id}", delete(roster::remove_player))
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
}
