use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Path unauthenticated requests are sent to.
pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// Session points at a user the store no longer holds.
    #[error("User {0} from session not found in store")]
    UserNotInStore(String),

    /// The user's effective role is below what the operation requires.
    ///
    /// # Fields
    /// - Id of the user that was denied
    /// - Description of the denied operation, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),

    /// Account carries an active suspension.
    #[error("User {0} is suspended")]
    AccountSuspended(String),

    /// Account is banned.
    #[error("User {0} is banned")]
    AccountBanned(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored in the
    /// session, indicating a forged or replayed callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Username/password pair did not match a stored account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Heartbeat carried the wrong shared secret.
    #[error("Invalid bot secret")]
    InvalidBotSecret,

    /// Exchanging the authorization code with Discord failed.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),

    /// Fetching the Discord profile with a fresh token failed.
    #[error("Failed to fetch Discord profile: {0}")]
    ProfileFetch(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInStore` → 303 redirect to the login route
/// - `AccessDenied` / `AccountSuspended` / `AccountBanned` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `InvalidCredentials` / `InvalidBotSecret` → 401 Unauthorized
/// - `TokenExchange` / `ProfileFetch` → 502 Bad Gateway
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInStore(_) => {
                return Redirect::to(LOGIN_PATH).into_response();
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::AccountSuspended(_) => (StatusCode::FORBIDDEN, "Your account is suspended"),
            Self::AccountBanned(_) => (StatusCode::FORBIDDEN, "Your account is banned"),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::InvalidBotSecret => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::TokenExchange(_) | Self::ProfileFetch(_) => (
                StatusCode::BAD_GATEWAY,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
