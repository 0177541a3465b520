//! Grade, religion and echelon routes

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/grade",
            get(handler::list_grades).post(handler::create_grade),
        )
        .route(
            "/grade/{id}",
            get(handler::get_grade)
                .put(handler::update_grade)
                .delete(handler::delete_grade),
        )
        .route(
            "/religion",
            get(handler::list_religions).post(handler::create_religion),
        )
        .route(
            "/religion/{id}",
            get(handler::get_religion)
                .put(handler::update_religion)
                .delete(handler::delete_religion),
        )
        .route(
            "/echelon",
            get(handler::list_echelons).post(handler::create_echelon),
        )
        .route(
            "/echelon/{id}",
            get(handler::get_echelon)
                .put(handler::update_echelon)
                .delete(handler::delete_echelon),
        )
}
