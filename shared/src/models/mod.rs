//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Employee ids are UUIDs, role and religion ids are short codes, every other
//! id is a `BIGSERIAL` `i64`. Timestamps are epoch milliseconds.

pub mod assignment;
pub mod employee;
pub mod org;
pub mod reference;
pub mod report;
pub mod role;

// Re-exports
pub use assignment::*;
pub use employee::*;
pub use org::*;
pub use reference::*;
pub use report::*;
pub use role::*;
