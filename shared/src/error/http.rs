//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use super::types::AppError;
use axum::extract::rejection::JsonRejection;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::SessionNotFound
            | Self::MenuItemNotFound
            | Self::CartItemNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity
            Self::CheckoutUnavailable => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError | Self::ReservationFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}

/// Malformed or mistyped JSON bodies become `InvalidRequest`
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_request(format!("Invalid request body: {}", rejection.body_text()))
            .with_detail("status", rejection.status().as_u16())
    }
}
