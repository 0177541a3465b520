//! Employee API module
//!
//! | Path | Method | Gate |
//! |------|--------|------|
//! | /employee | GET, POST | directory read / `can_add_employee` |
//! | /employee/search?q= | GET | directory read |
//! | /employee/unit/{unit_id} | GET | directory read |
//! | /employee/{nip} | GET, PUT | directory read |
//! | /employee/{nip}/profile-picture | POST | self or `can_add_employee` |
//! | /employee/{nip}/promote, /demote | PUT | promotion graph |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employee", get(handler::list).post(handler::create))
        .route("/employee/search", get(handler::search))
        .route("/employee/unit/{unit_id}", get(handler::list_by_unit))
        .route("/employee/{nip}", get(handler::get_by_nip).put(handler::update))
        .route(
            "/employee/{nip}/profile-picture",
            post(handler::upload_photo).layer(crate::api::upload_limit()),
        )
        .route("/employee/{nip}/promote", put(handler::change_role))
        .route("/employee/{nip}/demote", put(handler::change_role))
}
