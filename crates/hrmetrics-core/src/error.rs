//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the HR Metrics service.
///
/// Covers domain, infrastructure, and presentation layer errors. Note that the
/// response cache itself has no error variant: a cache miss is a normal
/// outcome, and every error surfaced to a caller originates from the database
/// fetch or the surrounding plumbing.
#[derive(Error, Debug)]
pub enum HrError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden access
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HrError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Unauthorized(_) | Self::InvalidCredentials => 401,
            Self::Forbidden(_) => 403,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for HrError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for HrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from an `HrError`.
    #[must_use]
    pub fn from_error(error: &HrError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&HrError> for ErrorResponse {
    fn from(error: &HrError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(HrError::not_found("Report", "hiring").status_code(), 404);
        assert_eq!(HrError::validation("bad input").status_code(), 400);
        assert_eq!(HrError::unauthorized("no credentials").status_code(), 401);
        assert_eq!(HrError::InvalidCredentials.status_code(), 401);
        assert_eq!(HrError::forbidden("no permission").status_code(), 403);
        assert_eq!(HrError::database("connection lost").status_code(), 500);
        assert_eq!(HrError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(HrError::not_found("Report", "hiring").error_code(), "NOT_FOUND");
        assert_eq!(HrError::validation("bad").error_code(), "VALIDATION_ERROR");
        assert_eq!(HrError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(HrError::database("down").error_code(), "DATABASE_ERROR");
        assert_eq!(HrError::internal("oops").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = HrError::not_found("Report", "department-analytics");
        assert!(not_found.to_string().contains("department-analytics"));

        let validation = HrError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let unauthorized = HrError::unauthorized("no credentials");
        assert!(unauthorized.to_string().contains("no credentials"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = HrError::database("timeout");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "DATABASE_ERROR");
        assert!(response.message.contains("timeout"));
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = HrError::not_found("Report", "unknown");
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "NOT_FOUND");
    }
}
