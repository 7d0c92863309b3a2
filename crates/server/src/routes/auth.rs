use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::{header, request::Parts}};
use axum_extra::extract::cookie::CookieJar;

use service::auth::{Session, SessionKeys};
use service::example::{ExampleRepository, ExampleService};

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerState {
    pub examples: Arc<ExampleService<dyn ExampleRepository>>,
    pub sessions: SessionKeys,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ExampleRepository>, jwt_secret: &str) -> Self {
        Self {
            examples: Arc::new(ExampleService::new(repo)),
            sessions: SessionKeys::new(jwt_secret),
        }
    }
}

/// `Authorization: Bearer <token>`, falling back to the `auth_token` cookie.
/// A non-Bearer Authorization header yields no token.
pub fn token_from_parts(parts: &Parts) -> Option<String> {
    if let Some(h) = parts.headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        let prefix = "Bearer ";
        if !h.starts_with(prefix) {
            tracing::warn!(path = %parts.uri.path(), "invalid Authorization format (expect Bearer)");
            return None;
        }
        return Some(h[prefix.len()..].trim().to_string());
    }
    CookieJar::from_headers(&parts.headers)
        .get(AUTH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

/// The verified session for this request, if any. Never rejects: public
/// operations ignore it and protected ones decide what a missing session means.
pub struct MaybeSession(pub Option<Session>);

#[async_trait]
impl FromRequestParts<ServerState> for MaybeSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts);
        Ok(MaybeSession(state.sessions.session_for(token.as_deref())))
    }
}
