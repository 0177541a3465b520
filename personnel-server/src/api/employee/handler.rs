//! Employee API handlers

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};
use shared::error::ApiResponse;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, RoleChange};

use crate::api::{ApiResult, SearchQuery};
use crate::api::upload::read_upload;
use crate::auth::CurrentUser;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Vec<Employee>> {
    let employees = state.services.employees.list(user.id).await?;
    Ok(ApiResponse::success(employees))
}

pub async fn search(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Employee>> {
    let employees = state.services.employees.search(user.id, &query.q).await?;
    Ok(ApiResponse::success(employees))
}

pub async fn list_by_unit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(unit_id): Path<i64>,
) -> ApiResult<Vec<Employee>> {
    let employees = state.services.employees.list_by_unit(user.id, unit_id).await?;
    Ok(ApiResponse::success(employees))
}

pub async fn get_by_nip(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(nip): Path<String>,
) -> ApiResult<Employee> {
    let employee = state.services.employees.get_by_nip(user.id, &nip).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<EmployeeCreate>,
) -> ApiResult<Employee> {
    let employee = state.services.employees.create(user.id, payload).await?;
    Ok(ApiResponse::success_with_message("Employee created", employee))
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(nip): Path<String>,
    Json(patch): Json<EmployeeUpdate>,
) -> ApiResult<Employee> {
    let employee = state.services.employees.update(user.id, &nip, patch).await?;
    Ok(ApiResponse::success(employee))
}

/// Shared by `/promote` and `/demote`; the promotion graph decides legality
pub async fn change_role(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(nip): Path<String>,
    Json(change): Json<RoleChange>,
) -> ApiResult<Employee> {
    let employee = state
        .services
        .promotions
        .promote(user.id, &nip, &change.role_id)
        .await?;
    Ok(ApiResponse::success_with_message("Role changed", employee))
}

/// Returns the new photo URL
pub async fn upload_photo(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(nip): Path<String>,
    multipart: Multipart,
) -> ApiResult<String> {
    let upload = read_upload(multipart).await?;
    let url = state.services.photos.upload_for(user.id, &nip, upload).await?;
    Ok(ApiResponse::success(url))
}
