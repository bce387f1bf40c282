//! Route definitions for purchase order endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::purchase_order;
use crate::state::AppState;

/// Routes mounted at `/purchase-orders`.
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
        .route("/", get(purchase_order::list).post(purchase_order::create))
        .route(
            "/{id}",
            get(purchase_order::get_by_id)
                .put(purchase_order::update)
                .patch(purchase_order::patch)
                .delete(purchase_order::delete),
        )
}
