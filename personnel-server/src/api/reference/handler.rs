use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ApiResponse;
use shared::models::{CodePayload, Echelon, Grade, Religion, ReligionCreate, ReligionUpdate};

use crate::api::ApiResult;
use crate::auth::CurrentUser;
use crate::state::AppState;

// ── Grades ──

pub async fn list_grades(State(state): State<AppState>) -> ApiResult<Vec<Grade>> {
    Ok(ApiResponse::success(state.services.references.list_grades().await?))
}

pub async fn get_grade(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Grade> {
    Ok(ApiResponse::success(state.services.references.get_grade(id).await?))
}

pub async fn create_grade(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CodePayload>,
) -> ApiResult<Grade> {
    let grade = state
        .services
        .references
        .create_grade(user.id, &payload.code)
        .await?;
    Ok(ApiResponse::success(grade))
}

pub async fn update_grade(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CodePayload>,
) -> ApiResult<Grade> {
    let grade = state
        .services
        .references
        .update_grade(user.id, id, &payload.code)
        .await?;
    Ok(ApiResponse::success(grade))
}

pub async fn delete_grade(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.services.references.delete_grade(user.id, id).await?;
    Ok(ApiResponse::ok())
}

// ── Religions ──

pub async fn list_religions(State(state): State<AppState>) -> ApiResult<Vec<Religion>> {
    Ok(ApiResponse::success(state.services.references.list_religions().await?))
}

pub async fn get_religion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Religion> {
    Ok(ApiResponse::success(state.services.references.get_religion(&id).await?))
}

pub async fn create_religion(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ReligionCreate>,
) -> ApiResult<Religion> {
    let religion = state
        .services
        .references
        .create_religion(user.id, payload)
        .await?;
    Ok(ApiResponse::success(religion))
}

pub async fn update_religion(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ReligionUpdate>,
) -> ApiResult<Religion> {
    let religion = state
        .services
        .references
        .update_religion(user.id, &id, &payload.name)
        .await?;
    Ok(ApiResponse::success(religion))
}

pub async fn delete_religion(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.services.references.delete_religion(user.id, &id).await?;
    Ok(ApiResponse::ok())
}

// ── Echelons ──

pub async fn list_echelons(State(state): State<AppState>) -> ApiResult<Vec<Echelon>> {
    Ok(ApiResponse::success(state.services.references.list_echelons().await?))
}

pub async fn get_echelon(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Echelon> {
    Ok(ApiResponse::success(state.services.references.get_echelon(id).await?))
}

pub async fn create_echelon(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CodePayload>,
) -> ApiResult<Echelon> {
    let echelon = state
        .services
        .references
        .create_echelon(user.id, &payload.code)
        .await?;
    Ok(ApiResponse::success(echelon))
}

pub async fn update_echelon(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CodePayload>,
) -> ApiResult<Echelon> {
    let echelon = state
        .services
        .references
        .update_echelon(user.id, id, &payload.code)
        .await?;
    Ok(ApiResponse::success(echelon))
}

pub async fn delete_echelon(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.services.references.delete_echelon(user.id, id).await?;
    Ok(ApiResponse::ok())
}
