//! Unified error system
//!
//! - [`ErrorCode`]: numeric codes, grouped by range
//! - [`ErrorCategory`]: range classification (used for logging)
//! - [`ErrorKind`]: caller-facing taxonomy, decides the HTTP status
//! - [`AppError`]: code, message and optional details
//! - [`ApiResponse`]: JSON envelope for every endpoint
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Employee and role errors
//! - 4xxx: Organization and reference table errors
//! - 5xxx: Assignment errors
//! - 6xxx: Promotion errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::OutOfScope).with_detail("unit_id", 7);
//! assert_eq!(err.kind(), ErrorKind::Unauthorized);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(2002));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use http::ErrorKind;
pub use types::{ApiResponse, AppError, AppResult};
