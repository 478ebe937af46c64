//! Maps service errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use service::ServiceError;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Error returned by handlers; wraps the service error it came from.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self(error)
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            ServiceError::UserNotFound(_) => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
            ServiceError::CartNotFound(_) => (StatusCode::NOT_FOUND, "CART_NOT_FOUND"),
            ServiceError::OrderNotFound(_) => (StatusCode::NOT_FOUND, "ORDER_NOT_FOUND"),
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ServiceError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self.0 {
            ServiceError::Database(db_error) => {
                error!("Database error while handling request: {}", db_error);
                "Internal server error".to_string()
            }
            other => {
                warn!("Request rejected ({}): {}", code, other);
                other.to_string()
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}
