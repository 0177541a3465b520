//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness
//! - [`auth`] - login and token refresh
//! - [`me`] - the authenticated employee's own profile
//! - [`employee`] - employee directory, promotion and photos
//! - [`assignment`] - employee assignment ledger
//! - [`unit`] / [`position`] - organization catalog
//! - [`reference`] - grades, religions and echelons
//! - [`role`] - role listing
//! - [`report`] - printable personnel sheets
//!
//! Everything is mounted under `/api/v1`. Only health and auth are public.

pub mod assignment;
pub mod auth;
pub mod employee;
pub mod health;
pub mod me;
pub mod position;
pub mod reference;
pub mod report;
pub mod role;
pub mod unit;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::{Router, middleware};
use http::HeaderName;
use serde::Deserialize;
use shared::error::ApiResponse;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::auth::rate_limit::global_rate_limit;
use crate::auth::require_auth;
use crate::error::ServiceError;
use crate::services::photo::MAX_FILE_SIZE;
use crate::state::AppState;

/// Handler result: envelope on success, service error otherwise
pub type ApiResult<T> = Result<ApiResponse<T>, ServiceError>;

/// `?q=` of the search routes
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Body limit for routes taking a photo upload
pub(crate) fn upload_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024)
}

/// Every route, public and authenticated (no global middleware, no state)
pub fn build_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(me::router())
        .merge(employee::router())
        .merge(assignment::router())
        .merge(unit::router())
        .merge(position::router())
        .merge(reference::router())
        .merge(role::router())
        .merge(report::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .merge(health::router())
        .merge(auth::router(state));

    Router::new().nest("/api/v1", public.merge(protected))
}

/// Fully configured application with all middleware and state
pub fn build_app(state: AppState) -> Router {
    health::mark_started();
    let request_id = HeaderName::from_static("x-request-id");

    build_router(&state)
        // Global request limiter
        .layer(middleware::from_fn_with_state(
            state.clone(),
            global_rate_limit,
        ))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request and echo it back
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}

#[cfg(test)]
mod tests;
