//! Route definitions for appointment service endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::appointment_service;
use crate::state::AppState;

/// Routes mounted at `/appointment-services`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// PATCH  /{id}  -> patch
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(appointment_service::list).post(appointment_service::create))
        .route(
            "/{id}",
            get(appointment_service::get_by_id)
                .put(appointment_service::update)
                .patch(appointment_service::patch)
                .delete(appointment_service::delete),
        )
}
