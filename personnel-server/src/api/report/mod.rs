//! Printable personnel sheets
//!
//! | Path | Method |
//! |------|--------|
//! | /print/employee/all | GET |
//! | /print/employee/{nip} | GET |
//! | /print/employee/unit/{unit_id} | GET |

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use shared::error::ApiResponse;
use shared::models::EmployeeReport;

use crate::api::ApiResult;
use crate::auth::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/print/employee/all", get(all))
        .route("/print/employee/unit/{unit_id}", get(by_unit))
        .route("/print/employee/{nip}", get(by_nip))
}

pub async fn all(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Vec<EmployeeReport>> {
    Ok(ApiResponse::success(state.services.reports.all(user.id).await?))
}

pub async fn by_nip(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(nip): Path<String>,
) -> ApiResult<EmployeeReport> {
    Ok(ApiResponse::success(state.services.reports.by_nip(user.id, &nip).await?))
}

pub async fn by_unit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(unit_id): Path<i64>,
) -> ApiResult<Vec<EmployeeReport>> {
    Ok(ApiResponse::success(state.services.reports.by_unit(user.id, unit_id).await?))
}
