//! Unified error codes for the personnel service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Employee and role errors
//! - 4xxx: Organization and reference table errors
//! - 5xxx: Assignment errors
//! - 6xxx: Promotion errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so clients can switch on the number.
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
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Too many requests
    TooManyRequests = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Wrong password
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Too many login attempts
    TooManyAttempts = 1005,

    // ==================== 2xxx: Permission ====================
    /// Role lacks the required capability
    PermissionDenied = 2001,
    /// Target unit is outside the proposer's home unit
    OutOfScope = 2002,
    /// Proposer has no assignment on record
    NoHomeAssignment = 2003,
    /// Role changes go through promotion only
    RoleChangeNotAllowed = 2004,

    // ==================== 3xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 3001,
    /// NIP already registered
    EmployeeNipExists = 3002,
    /// NIP must be 18 digits
    InvalidNip = 3003,
    /// Password too short
    PasswordTooShort = 3004,
    /// Name must be letters and spaces
    InvalidName = 3005,
    /// Phone number must be digits
    InvalidPhone = 3006,
    /// Gender must be a single character
    InvalidGender = 3007,
    /// Address too short
    InvalidAddress = 3008,
    /// Tax id must be 16 characters
    InvalidNpwp = 3009,
    /// Role not found
    RoleNotFound = 3101,
    /// No file provided
    NoFileProvided = 3201,
    /// Unsupported file format
    UnsupportedFileFormat = 3202,
    /// Invalid image file
    InvalidImageFile = 3203,
    /// File too large
    FileTooLarge = 3204,
    /// Image processing failed
    ImageProcessingFailed = 3205,

    // ==================== 4xxx: Organization ====================
    /// Unit not found
    UnitNotFound = 4001,
    /// Unit still referenced
    UnitInUse = 4002,
    /// Position not found
    PositionNotFound = 4101,
    /// Position still referenced
    PositionInUse = 4102,
    /// Grade not found
    GradeNotFound = 4201,
    /// Grade code already exists
    GradeExists = 4202,
    /// Religion not found
    ReligionNotFound = 4301,
    /// Religion id already exists
    ReligionExists = 4302,
    /// Echelon not found
    EchelonNotFound = 4401,
    /// Echelon code already exists
    EchelonExists = 4402,
    /// Reference row still used by employees
    ReferenceInUse = 4501,

    // ==================== 5xxx: Assignment ====================
    /// Assignment not found
    AssignmentNotFound = 5001,
    /// Assignment transaction failed
    AssignmentFailed = 5002,

    // ==================== 6xxx: Promotion ====================
    /// Proposer tried to change their own role
    SelfPromotion = 6001,
    /// New role equals the current role
    RoleUnchanged = 6002,
    /// Promotion graph does not allow this change
    PromotionNotAllowed = 6003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Object storage error
    StorageError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::TooManyRequests => "Too many requests",

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "Invalid NIP or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Invalid token",
            ErrorCode::TooManyAttempts => "Too many attempts, please try again later",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::OutOfScope => "Target unit is outside your unit",
            ErrorCode::NoHomeAssignment => "You have no active assignment",
            ErrorCode::RoleChangeNotAllowed => "Role can only be changed through promotion",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeNipExists => "NIP already registered",
            ErrorCode::InvalidNip => "NIP must be exactly 18 digits",
            ErrorCode::PasswordTooShort => "Password must be at least 8 characters",
            ErrorCode::InvalidName => "Name must be at least 3 letters or spaces",
            ErrorCode::InvalidPhone => "Phone number must be at least 6 digits",
            ErrorCode::InvalidGender => "Gender must be a single character",
            ErrorCode::InvalidAddress => "Address must be at least 6 characters",
            ErrorCode::InvalidNpwp => "NPWP must be exactly 16 characters",
            ErrorCode::RoleNotFound => "Role not found",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidImageFile => "Invalid image file",
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::ImageProcessingFailed => "Image processing failed",

            // Organization
            ErrorCode::UnitNotFound => "Unit not found",
            ErrorCode::UnitInUse => "Unit is still referenced",
            ErrorCode::PositionNotFound => "Position not found",
            ErrorCode::PositionInUse => "Position is still referenced",
            ErrorCode::GradeNotFound => "Grade not found",
            ErrorCode::GradeExists => "Grade already exists",
            ErrorCode::ReligionNotFound => "Religion not found",
            ErrorCode::ReligionExists => "Religion already exists",
            ErrorCode::EchelonNotFound => "Echelon not found",
            ErrorCode::EchelonExists => "Echelon already exists",
            ErrorCode::ReferenceInUse => "Reference is still used by employees",

            // Assignment
            ErrorCode::AssignmentNotFound => "Assignment not found",
            ErrorCode::AssignmentFailed => "Failed to assign employee",

            // Promotion
            ErrorCode::SelfPromotion => "You cannot change your own role",
            ErrorCode::RoleUnchanged => "Employee already holds this role",
            ErrorCode::PromotionNotAllowed => "Role change not permitted",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageError => "Storage error",
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
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::TooManyRequests),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::TooManyAttempts),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::OutOfScope),
            2003 => Ok(ErrorCode::NoHomeAssignment),
            2004 => Ok(ErrorCode::RoleChangeNotAllowed),

            // Employee
            3001 => Ok(ErrorCode::EmployeeNotFound),
            3002 => Ok(ErrorCode::EmployeeNipExists),
            3003 => Ok(ErrorCode::InvalidNip),
            3004 => Ok(ErrorCode::PasswordTooShort),
            3005 => Ok(ErrorCode::InvalidName),
            3006 => Ok(ErrorCode::InvalidPhone),
            3007 => Ok(ErrorCode::InvalidGender),
            3008 => Ok(ErrorCode::InvalidAddress),
            3009 => Ok(ErrorCode::InvalidNpwp),
            3101 => Ok(ErrorCode::RoleNotFound),
            3201 => Ok(ErrorCode::NoFileProvided),
            3202 => Ok(ErrorCode::UnsupportedFileFormat),
            3203 => Ok(ErrorCode::InvalidImageFile),
            3204 => Ok(ErrorCode::FileTooLarge),
            3205 => Ok(ErrorCode::ImageProcessingFailed),

            // Organization
            4001 => Ok(ErrorCode::UnitNotFound),
            4002 => Ok(ErrorCode::UnitInUse),
            4101 => Ok(ErrorCode::PositionNotFound),
            4102 => Ok(ErrorCode::PositionInUse),
            4201 => Ok(ErrorCode::GradeNotFound),
            4202 => Ok(ErrorCode::GradeExists),
            4301 => Ok(ErrorCode::ReligionNotFound),
            4302 => Ok(ErrorCode::ReligionExists),
            4401 => Ok(ErrorCode::EchelonNotFound),
            4402 => Ok(ErrorCode::EchelonExists),
            4501 => Ok(ErrorCode::ReferenceInUse),

            // Assignment
            5001 => Ok(ErrorCode::AssignmentNotFound),
            5002 => Ok(ErrorCode::AssignmentFailed),

            // Promotion
            6001 => Ok(ErrorCode::SelfPromotion),
            6002 => Ok(ErrorCode::RoleUnchanged),
            6003 => Ok(ErrorCode::PromotionNotAllowed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),
            9004 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
