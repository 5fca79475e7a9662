use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use test_utils::{
    builder::TestBuilder,
    context::new_session,
    factory::user::{with_role, UserFactory},
};

use crate::server::{
    error::AppError,
    testing::{app_state, login_as, store, CLIENT_IP, SUPER_ADMIN_ID},
    util::client_ip::ClientIp,
};

mod roster;
mod settings;
mod user;

/// Renders a handler result the way axum would.
fn respond<T: IntoResponse>(result: Result<T, AppError>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn client_ip() -> ClientIp {
    ClientIp(CLIENT_IP.to_string())
}
