//! Route definitions for goods receipt item endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::goods_receipt_item;
use crate::state::AppState;

/// Routes mounted at `/goods-receipt-items`.
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
        .route("/", get(goods_receipt_item::list).post(goods_receipt_item::create))
        .route(
            "/{id}",
            get(goods_receipt_item::get_by_id)
                .put(goods_receipt_item::update)
                .patch(goods_receipt_item::patch)
                .delete(goods_receipt_item::delete),
        )
}
