//! Position API module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/position", get(handler::list).post(handler::create))
        .route("/position/search", get(handler::search))
        .route(
            "/position/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
