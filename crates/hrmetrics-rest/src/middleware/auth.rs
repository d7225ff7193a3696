//! HTTP basic authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::WWW_AUTHENTICATE, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use hrmetrics_config::SecurityConfig;
use hrmetrics_core::HrError;
use std::sync::Arc;
use tracing::debug;

use crate::responses::AppError;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthState {
    pub security: Arc<SecurityConfig>,
}

impl AuthState {
    /// Creates a new auth middleware state.
    #[must_use]
    pub fn new(security: Arc<SecurityConfig>) -> Self {
        Self { security }
    }
}

/// Middleware that validates HTTP basic credentials against the configured
/// user map.
///
/// In dev mode every request passes without credentials, matching how the
/// service is run for local development. A rejected request carries a
/// `WWW-Authenticate: Basic` challenge.
pub async fn basic_auth_middleware(
    State(state): State<AuthState>,
    auth: Option<TypedHeader<Authorization<Basic>>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if state.security.dev_mode {
        return next.run(request).await;
    }

    let Some(TypedHeader(Authorization(credentials))) = auth else {
        debug!("Missing basic auth credentials");
        return challenge(HrError::unauthorized("Missing credentials"));
    };

    let valid = state
        .security
        .users
        .get(credentials.username())
        .is_some_and(|expected| constant_time_eq(expected, credentials.password()));

    if valid {
        debug!("Authenticated user: {}", credentials.username());
        next.run(request).await
    } else {
        debug!("Invalid credentials for user: {}", credentials.username());
        challenge(HrError::InvalidCredentials)
    }
}

/// Builds a 401 response with the basic-auth challenge header.
fn challenge(error: HrError) -> Response {
    let mut response = AppError(error).into_response();
    response
        .headers_mut()
        .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
    response
}

/// Compares two secrets without short-circuiting on the first mismatch.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("s3cret", "s3cret"));
        assert!(!constant_time_eq("s3cret", "s3cres"));
        assert!(!constant_time_eq("s3cret", "s3cret "));
        assert!(!constant_time_eq("", "x"));
        assert!(constant_time_eq("", ""));
    }
}
