//! Error kind taxonomy and its HTTP status mapping
//!
//! Every [`ErrorCode`] belongs to exactly one [`ErrorKind`]; the kind alone
//! decides the HTTP status, so handlers never match on individual codes.

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Stable error kind exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or semantically invalid input
    BadRequest,
    /// Authentication, capability or scope check failed
    Unauthorized,
    /// Referenced entity absent
    NotFound,
    /// Duplicate key or entity still referenced
    Conflict,
    /// Rate limit exceeded
    TooManyRequests,
    /// Storage, transaction or unexpected failure
    Internal,
}

impl ErrorKind {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorCode {
    /// Kind of this code, `None` for [`ErrorCode::Success`]
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            Self::Success => return None,

            Self::NotFound
            | Self::EmployeeNotFound
            | Self::RoleNotFound
            | Self::UnitNotFound
            | Self::PositionNotFound
            | Self::GradeNotFound
            | Self::ReligionNotFound
            | Self::EchelonNotFound
            | Self::AssignmentNotFound => ErrorKind::NotFound,

            Self::AlreadyExists
            | Self::EmployeeNipExists
            | Self::GradeExists
            | Self::ReligionExists
            | Self::EchelonExists
            | Self::UnitInUse
            | Self::PositionInUse
            | Self::ReferenceInUse => ErrorKind::Conflict,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::PermissionDenied
            | Self::OutOfScope
            | Self::NoHomeAssignment
            | Self::RoleChangeNotAllowed
            | Self::SelfPromotion
            | Self::PromotionNotAllowed => ErrorKind::Unauthorized,

            Self::TooManyRequests | Self::TooManyAttempts => ErrorKind::TooManyRequests,

            Self::Unknown
            | Self::AssignmentFailed
            | Self::ImageProcessingFailed
            | Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::StorageError => ErrorKind::Internal,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::InvalidNip
            | Self::PasswordTooShort
            | Self::InvalidName
            | Self::InvalidPhone
            | Self::InvalidGender
            | Self::InvalidAddress
            | Self::InvalidNpwp
            | Self::NoFileProvided
            | Self::UnsupportedFileFormat
            | Self::InvalidImageFile
            | Self::FileTooLarge
            | Self::RoleUnchanged => ErrorKind::BadRequest,
        };
        Some(kind)
    }

    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        self.kind()
            .map(|k| k.http_status())
            .unwrap_or(StatusCode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.kind(), None);
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::EmployeeNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::RoleNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::AssignmentNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unauthorized_status() {
        // capability and scope denials surface as 401, same as missing auth
        for code in [
            ErrorCode::NotAuthenticated,
            ErrorCode::PermissionDenied,
            ErrorCode::OutOfScope,
            ErrorCode::NoHomeAssignment,
            ErrorCode::SelfPromotion,
            ErrorCode::PromotionNotAllowed,
        ] {
            assert_eq!(code.kind(), Some(ErrorKind::Unauthorized));
            assert_eq!(code.http_status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(ErrorCode::RoleUnchanged.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidNip.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::UnsupportedFileFormat.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::EmployeeNipExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::ReligionExists.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_too_many_requests_status() {
        assert_eq!(
            ErrorCode::TooManyRequests.http_status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ErrorCode::TooManyAttempts.http_status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_internal_status() {
        assert_eq!(
            ErrorCode::AssignmentFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_serialize() {
        let json = serde_json::to_string(&ErrorKind::TooManyRequests).unwrap();
        assert_eq!(json, "\"too_many_requests\"");
    }
}
