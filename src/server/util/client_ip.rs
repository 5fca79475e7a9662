//! Client address extraction for audit entries.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use std::{convert::Infallible, net::SocketAddr};

use crate::server::state::AppState;

/// Address recorded when neither a forwarding header nor the socket is known.
pub const UNKNOWN_IP: &str = "unknown";

/// Best-effort client address.
///
/// Uses the peer socket address, then `"unknown"`. When the deployment trusts
/// its reverse proxy (`AppState::trust_forwarded_for`), the first hop of
/// `X-Forwarded-For` takes precedence. Never rejects a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let socket = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(resolve(&parts.headers, socket, state.trust_forwarded_for)))
    }
}

fn resolve(headers: &HeaderMap, socket: Option<SocketAddr>, trust_forwarded_for: bool) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .filter(|_| trust_forwarded_for)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|hop| !hop.is_empty());

    match (forwarded, socket) {
        (Some(hop), _) => hop.to_string(),
        (None, Some(addr)) => addr.ip().to_string(),
        (None, None) => UNKNOWN_IP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn forwarded() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers
    }

    #[test]
    fn trusted_proxy_uses_first_forwarded_hop() {
        let socket = "127.0.0.1:4000".parse().ok();

        assert_eq!(resolve(&forwarded(), socket, true), "203.0.113.7");
    }

    #[test]
    fn forwarded_header_ignored_unless_trusted() {
        let socket = "192.0.2.10:5555".parse().ok();

        assert_eq!(resolve(&forwarded(), socket, false), "192.0.2.10");
        assert_eq!(resolve(&forwarded(), None, false), UNKNOWN_IP);
    }

    #[test]
    fn falls_back_to_socket_then_unknown() {
        let socket = "192.0.2.10:5555".parse().ok();

        assert_eq!(resolve(&HeaderMap::new(), socket, true), "192.0.2.10");
        assert_eq!(resolve(&HeaderMap::new(), None, true), UNKNOWN_IP);
    }
}
