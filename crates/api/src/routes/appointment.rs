//! Route definitions for appointment endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::appointment;
use crate::state::AppState;

/// Routes mounted at `/appointments`.
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
        .route("/", get(appointment::list).post(appointment::create))
        .route(
            "/{id}",
            get(appointment::get_by_id)
                .put(appointment::update)
                .patch(appointment::patch)
                .delete(appointment::delete),
        )
}
