use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ApiResponse;
use shared::models::{AssignmentKey, EmployeeAssignmentResponse};
use uuid::Uuid;

use crate::api::ApiResult;
use crate::auth::CurrentUser;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Vec<EmployeeAssignmentResponse>> {
    let rows = state.services.assignments.list(user.id).await?;
    Ok(ApiResponse::success(rows))
}

pub async fn assign(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(key): Json<AssignmentKey>,
) -> ApiResult<()> {
    state.services.assignments.assign(user.id, key).await?;
    Ok(ApiResponse::ok())
}

pub async fn deactivate(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(key): Json<AssignmentKey>,
) -> ApiResult<()> {
    state.services.assignments.deactivate(user.id, key).await?;
    Ok(ApiResponse::ok())
}

pub async fn get_by_employee(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(employee_id): Path<Uuid>,
) -> ApiResult<EmployeeAssignmentResponse> {
    let view = state
        .services
        .assignments
        .get_by_employee(user.id, employee_id)
        .await?;
    Ok(ApiResponse::success(view))
}

pub async fn get_by_composite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((employee_id, unit_id, position_id)): Path<(Uuid, i64, i64)>,
) -> ApiResult<EmployeeAssignmentResponse> {
    let key = AssignmentKey {
        employee_id,
        unit_id,
        position_id,
    };
    let view = state
        .services
        .assignments
        .get_by_composite(user.id, key)
        .await?;
    Ok(ApiResponse::success(view))
}

pub async fn get_by_unit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(unit_id): Path<i64>,
) -> ApiResult<Vec<EmployeeAssignmentResponse>> {
    let rows = state.services.assignments.get_by_unit(user.id, unit_id).await?;
    Ok(ApiResponse::success(rows))
}
