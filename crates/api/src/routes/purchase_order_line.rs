//! Route definitions for purchase order line endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::purchase_order_line;
use crate::state::AppState;

/// Routes mounted at `/purchase-order-lines`.
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
        .route("/", get(purchase_order_line::list).post(purchase_order_line::create))
        .route(
            "/{id}",
            get(purchase_order_line::get_by_id)
                .put(purchase_order_line::update)
                .patch(purchase_order_line::patch)
                .delete(purchase_order_line::delete),
        )
}
