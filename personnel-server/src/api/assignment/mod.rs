//! Employee assignment API module
//!
//! Scope checks live in the service; every route here only needs a valid
//! access token to reach it.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/employee-assignment",
            get(handler::list).post(handler::assign),
        )
        .route("/employee-assignment/deactivate", post(handler::deactivate))
        .route("/employee-assignment/unit/{unit_id}", get(handler::get_by_unit))
        .route("/employee-assignment/{employee_id}", get(handler::get_by_employee))
        .route(
            "/employee-assignment/{employee_id}/{unit_id}/{position_id}",
            get(handler::get_by_composite),
        )
}
