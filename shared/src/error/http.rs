//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::SlotOutsideHours
            | Self::DateInPast => StatusCode::BAD_REQUEST,

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::SlotUnavailable | Self::SlotFullyBooked => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::StoreError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::DateInPast.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::SlotUnavailable.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::SlotFullyBooked.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::StoreError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
