//! HTTP middleware.

mod auth;
mod logging;

pub use auth::{basic_auth_middleware, AuthState};
pub use logging::logging_middleware;
