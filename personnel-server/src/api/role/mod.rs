//! Role listing

use axum::{Router, extract::State, routing::get};
use shared::error::ApiResponse;
use shared::models::Role;

use crate::api::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/roles", get(list))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Role>> {
    let roles = state.services.roles.find_all().await?;
    Ok(ApiResponse::success(roles))
}
