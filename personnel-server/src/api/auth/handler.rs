//! Authentication handlers

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use shared::error::ApiResponse;

use crate::api::ApiResult;
use crate::auth::TokenPair;
use crate::auth::middleware::validate_refresh;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub nip: String,
    pub password: String,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<TokenPair> {
    let pair = state.services.auth.login(&req.nip, &req.password).await?;
    Ok(ApiResponse::success(pair))
}

/// POST /api/v1/auth/refresh with `Authorization: Bearer <refresh token>`
pub async fn refresh(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<TokenPair> {
    let user = validate_refresh(&state.jwt, &headers)?;
    let pair = state.services.auth.refresh(user.id).await?;
    Ok(ApiResponse::success(pair))
}
