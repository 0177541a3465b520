use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ApiResponse;
use shared::models::{Position, PositionCreate, PositionUpdate};

use crate::api::{ApiResult, SearchQuery};
use crate::auth::CurrentUser;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Position>> {
    Ok(ApiResponse::success(state.services.org.list_positions().await?))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Position>> {
    let positions = state.services.org.search_positions(&query.q).await?;
    Ok(ApiResponse::success(positions))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Position> {
    Ok(ApiResponse::success(state.services.org.get_position(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<PositionCreate>,
) -> ApiResult<Position> {
    let position = state.services.org.create_position(user.id, payload).await?;
    Ok(ApiResponse::success_with_message("Position created", position))
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(patch): Json<PositionUpdate>,
) -> ApiResult<Position> {
    let position = state.services.org.update_position(user.id, id, patch).await?;
    Ok(ApiResponse::success(position))
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.services.org.delete_position(user.id, id).await?;
    Ok(ApiResponse::ok())
}
