//! Authentication routes
//!
//! Both routes are public: login takes credentials, refresh takes the
//! refresh token as its bearer token.

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::rate_limit::login_rate_limit;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    let login = Router::new()
        .route("/auth/login", post(handler::login))
        .route_layer(middleware::from_fn_with_state(state.clone(), login_rate_limit));

    login.route("/auth/refresh", post(handler::refresh))
}
