//! Self-service routes of the authenticated employee

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(handler::get).put(handler::update))
        .route(
            "/me/profile-picture",
            post(handler::upload_photo).layer(crate::api::upload_limit()),
        )
}
