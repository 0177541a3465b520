//! Authentication middleware and extractor

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use shared::error::AppError;

use crate::auth::jwt::{CurrentUser, JwtError, JwtService, TokenType};
use crate::state::AppState;

fn token_error(e: JwtError) -> AppError {
    match e {
        JwtError::ExpiredToken => AppError::token_expired(),
        _ => AppError::invalid_token("Invalid token"),
    }
}

/// Bearer token of the request, if any
pub fn bearer_token(headers: &http::HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(AppError::unauthorized)?;
    JwtService::extract_from_header(header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))
}

/// Validate `Authorization: Bearer <access token>` and insert [`CurrentUser`]
///
/// | Failure              | Code          |
/// |----------------------|---------------|
/// | no header            | NotAuthenticated |
/// | expired token        | TokenExpired  |
/// | anything else        | TokenInvalid  |
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?;

    let user = state
        .jwt
        .validate(token, TokenType::Access)
        .and_then(CurrentUser::try_from)
        .map_err(|e| {
            tracing::warn!(error = %e, uri = %req.uri(), "Authentication failed");
            token_error(e)
        })?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Read the [`CurrentUser`] placed by [`require_auth`]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or_else(AppError::unauthorized)
    }
}

/// Validate a refresh token taken from the Authorization header
pub fn validate_refresh(jwt: &JwtService, headers: &http::HeaderMap) -> Result<CurrentUser, AppError> {
    let token = bearer_token(headers)?;
    jwt.validate(token, TokenType::Refresh)
        .and_then(CurrentUser::try_from)
        .map_err(|e| {
            tracing::warn!(error = %e, "Refresh token rejected");
            token_error(e)
        })
}
