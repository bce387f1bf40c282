//! Route definitions for chief complaint endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::chief_complaint;
use crate::state::AppState;

/// Routes mounted at `/chief-complaints`.
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
        .route("/", get(chief_complaint::list).post(chief_complaint::create))
        .route(
            "/{id}",
            get(chief_complaint::get_by_id)
                .put(chief_complaint::update)
                .patch(chief_complaint::patch)
                .delete(chief_complaint::delete),
        )
}
