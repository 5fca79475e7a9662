use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{PasswordLoginDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        model::user::User,
        service::auth::AuthService,
        state::AppState,
        util::client_ip::ClientIp,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters Discord appends to the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Redirects to the Discord consent screen.
///
/// Stores the CSRF state in the session for validation by `callback`.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to the Discord consent screen
/// - `500 Internal Server Error` - Session could not be written
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord OAuth2"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.store, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the Discord login.
///
/// Validates the CSRF state, exchanges the code, resolves or creates the user,
/// stores the user id in the session and records a `login` audit entry.
///
/// # Returns
/// - `307 Temporary Redirect` - Logged in, back to the app
/// - `400 Bad Request` - CSRF state mismatch
/// - `403 Forbidden` - User is banned
/// - `502 Bad Gateway` - Discord token exchange or profile fetch failed
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the app"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 403, description = "User is banned", body = ErrorDto),
        (status = 502, description = "Discord request failed", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.store, &state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.state).await?;

    let user = auth_service.callback(params.code, &ip).await?;
    start_session(&session, &user).await?;

    Ok(Redirect::temporary(&state.app_url))
}

/// Logs in with the bootstrap account's username and password.
///
/// # Returns
/// - `200 OK` - Logged in, current user
/// - `401 Unauthorized` - Invalid credentials
/// - `403 Forbidden` - User is banned
#[utoipa::path(
    post,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = PasswordLoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "User is banned", body = ErrorDto)
    ),
)]
pub async fn password_login(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<PasswordLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.store, &state.http_client, &state.oauth_client);

    let user = auth_service
        .password_login(&payload.username, &payload.password, &ip)
        .await?;
    start_session(&session, &user).await?;

    Ok(Json(user.into_dto()))
}

/// Ends the session and sends the browser back to the app.
///
/// # Returns
/// - `307 Temporary Redirect` - Session cleared, redirect to the app URL
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the app")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::temporary(&state.app_url)
}

/// Returns the logged-in user with their effective role.
///
/// Suspended and banned users can still read their own profile.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `200 OK` - Current user
/// - `303 See Other` - Not logged in, or the session user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 303, description = "Not logged in, redirect to login")
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.store, &session, state.super_admin_id())
        .current_user()
        .await?;

    Ok(Json(user.into_dto()))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AuthError::CsrfValidationFailed.into())
}

async fn start_session(session: &Session, user: &User) -> Result<(), AppError> {
    AuthSession::new(session).set_user_id(&user.id).await
}
