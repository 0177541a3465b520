use axum::{Json, extract::Multipart, extract::State};
use shared::error::ApiResponse;
use shared::models::{Employee, EmployeeUpdate};

use crate::api::ApiResult;
use crate::api::upload::read_upload;
use crate::auth::CurrentUser;
use crate::state::AppState;

pub async fn get(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Employee> {
    let employee = state.services.me.get(user.id).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(patch): Json<EmployeeUpdate>,
) -> ApiResult<Employee> {
    let employee = state.services.me.update(user.id, patch).await?;
    Ok(ApiResponse::success(employee))
}

/// Returns the new photo URL
pub async fn upload_photo(
    State(state): State<AppState>,
    user: CurrentUser,
    multipart: Multipart,
) -> ApiResult<String> {
    let upload = read_upload(multipart).await?;
    let url = state.services.me.upload_photo(user.id, upload).await?;
    Ok(ApiResponse::success(url))
}
