//! Session extraction

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::authn::session::Session;
use crate::errors::ConsoleError;
use crate::server::error::ApiError;
use crate::server::state::ServerState;

pub const SESSION_HEADER: &str = "x-session-token";

/// The session named by the `X-Session-Token` header
pub struct CurrentSession(pub Session);

impl FromRequestParts<Arc<ServerState>> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ServerState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConsoleError::AuthError("missing session token".to_string()))?;

        let session = state
            .sessions
            .get(token)
            .await
            .ok_or_else(|| ConsoleError::AuthError("unknown session".to_string()))?;

        Ok(CurrentSession(session))
    }
}
