//! Authentication: JWT tokens, the auth middleware and rate limiting

pub mod jwt;
pub mod middleware;
pub mod rate_limit;

pub use jwt::{CurrentUser, JwtConfig, JwtService, TokenPair};
pub use middleware::require_auth;
