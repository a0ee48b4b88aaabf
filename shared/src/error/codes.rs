//! Unified error codes for the cafe service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Visitor session errors
//! - 2xxx: Menu errors
//! - 3xxx: Reservation errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Session ====================
    /// Visitor session not found
    SessionNotFound = 1001,

    // ==================== 2xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 2001,

    // ==================== 3xxx: Reservation ====================
    /// Reservation could not be recorded
    ReservationFailed = 3001,

    // ==================== 4xxx: Order ====================
    /// Cart line not found
    CartItemNotFound = 4001,
    /// Checkout panel is not open or the cart is empty
    CheckoutUnavailable = 4002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Session
            ErrorCode::SessionNotFound => "Session not found",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",

            // Reservation
            ErrorCode::ReservationFailed => "Error submitting reservation.",

            // Order
            ErrorCode::CartItemNotFound => "Cart item not found",
            ErrorCode::CheckoutUnavailable => "Checkout is not available while the order is empty",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            1001 => Ok(ErrorCode::SessionNotFound),

            2001 => Ok(ErrorCode::MenuItemNotFound),

            3001 => Ok(ErrorCode::ReservationFailed),

            4001 => Ok(ErrorCode::CartItemNotFound),
            4002 => Ok(ErrorCode::CheckoutUnavailable),

            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::SessionNotFound.code(), 1001);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 2001);
        assert_eq!(ErrorCode::ReservationFailed.code(), 3001);
        assert_eq!(ErrorCode::CheckoutUnavailable.code(), 4002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::SessionNotFound,
            ErrorCode::MenuItemNotFound,
            ErrorCode::ReservationFailed,
            ErrorCode::CartItemNotFound,
            ErrorCode::CheckoutUnavailable,
            ErrorCode::InternalError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::CartItemNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("1001").unwrap();
        assert_eq!(code, ErrorCode::SessionNotFound);

        assert!(serde_json::from_str::<ErrorCode>("7777").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::ReservationFailed), "3001");
        assert_eq!(
            format!("{}", InvalidErrorCode(12)),
            "invalid error code: 12"
        );
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::ReservationFailed.message(),
            "Error submitting reservation."
        );
    }
}
