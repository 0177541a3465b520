//! Unit API module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/unit", get(handler::list).post(handler::create))
        .route("/unit/search", get(handler::search))
        .route(
            "/unit/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
