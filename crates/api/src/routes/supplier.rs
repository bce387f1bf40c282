//! Route definitions for supplier endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::supplier;
use crate::state::AppState;

/// Routes mounted at `/suppliers`.
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
        .route("/", get(supplier::list).post(supplier::create))
        .route(
            "/{id}",
            get(supplier::get_by_id)
                .put(supplier::update)
                .patch(supplier::patch)
                .delete(supplier::delete),
        )
}
