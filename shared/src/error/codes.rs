//! Unified error codes for the booking workspace
//!
//! This module defines all error codes used across booking-server, the
//! client crate, and any frontend consuming the API. Error codes are
//! organized by category:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Reservation ====================
    /// Requested time slot is already unavailable for that date
    SlotUnavailable = 4001,
    /// No free table remains for the requested date and slot
    SlotFullyBooked = 4002,
    /// Requested time slot is not part of the day's seating calendar
    SlotOutsideHours = 4003,
    /// Requested date lies in the past
    DateInPast = 4004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Reservation store error
    StoreError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default English message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Reservation
            ErrorCode::SlotUnavailable => "This time slot is no longer available",
            ErrorCode::SlotFullyBooked => "This time slot is fully booked",
            ErrorCode::SlotOutsideHours => "Requested time is outside service hours",
            ErrorCode::DateInPast => "Reservation date is in the past",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StoreError => "Reservation store error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
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
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Reservation
            4001 => Ok(ErrorCode::SlotUnavailable),
            4002 => Ok(ErrorCode::SlotFullyBooked),
            4003 => Ok(ErrorCode::SlotOutsideHours),
            4004 => Ok(ErrorCode::DateInPast),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StoreError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Reservation
        assert_eq!(ErrorCode::SlotUnavailable.code(), 4001);
        assert_eq!(ErrorCode::SlotFullyBooked.code(), 4002);
        assert_eq!(ErrorCode::SlotOutsideHours.code(), 4003);
        assert_eq!(ErrorCode::DateInPast.code(), 4004);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::StoreError.code(), 9002);
    }

    #[test]
    fn test_error_code_messages() {
        assert_eq!(ErrorCode::Success.message(), "Success");
        assert_eq!(ErrorCode::ValidationFailed.message(), "Validation failed");
        assert_eq!(
            ErrorCode::SlotUnavailable.message(),
            "This time slot is no longer available"
        );
        assert_eq!(
            ErrorCode::SlotFullyBooked.message(),
            "This time slot is fully booked"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }

    #[test]
    fn test_error_code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::SlotUnavailable,
            ErrorCode::SlotFullyBooked,
            ErrorCode::SlotOutsideHours,
            ErrorCode::DateInPast,
            ErrorCode::InternalError,
            ErrorCode::StoreError,
        ];

        for code in codes {
            let value = code.code();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_error_code_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_error_code_serialize() {
        let code = ErrorCode::SlotUnavailable;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "4001");
    }

    #[test]
    fn test_error_code_deserialize() {
        let code: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(code, ErrorCode::SlotFullyBooked);

        let result: Result<ErrorCode, _> = serde_json::from_str("1234");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(err.to_string(), "invalid error code: 999");
    }
}
