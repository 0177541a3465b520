use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ApiResponse;
use shared::models::{Unit, UnitCreate, UnitUpdate};

use crate::api::{ApiResult, SearchQuery};
use crate::auth::CurrentUser;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Unit>> {
    Ok(ApiResponse::success(state.services.org.list_units().await?))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Unit>> {
    let units = state.services.org.search_units(&query.q).await?;
    Ok(ApiResponse::success(units))
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Unit> {
    Ok(ApiResponse::success(state.services.org.get_unit(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<UnitCreate>,
) -> ApiResult<Unit> {
    let unit = state.services.org.create_unit(user.id, payload).await?;
    Ok(ApiResponse::success_with_message("Unit created", unit))
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(patch): Json<UnitUpdate>,
) -> ApiResult<Unit> {
    let unit = state.services.org.update_unit(user.id, id, patch).await?;
    Ok(ApiResponse::success(unit))
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.services.org.delete_unit(user.id, id).await?;
    Ok(ApiResponse::ok())
}
