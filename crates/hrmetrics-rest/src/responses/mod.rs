//! API response types.
//!
//! Report payloads go out bare, exactly as the service produced them - the
//! response cache must stay transparent on the wire. Errors are mapped to an
//! HTTP status plus a JSON `ErrorResponse` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hrmetrics_core::{ErrorResponse, HrError};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub HrError);

impl From<HrError> for AppError {
    fn from(err: HrError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: serde::Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_maps_status() {
        let response = AppError(HrError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AppError(HrError::database("down")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
