//! Route definitions for goods receipt endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::goods_receipt;
use crate::state::AppState;

/// Routes mounted at `/goods-receipts`.
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
        .route("/", get(goods_receipt::list).post(goods_receipt::create))
        .route(
            "/{id}",
            get(goods_receipt::get_by_id)
                .put(goods_receipt::update)
                .patch(goods_receipt::patch)
                .delete(goods_receipt::delete),
        )
}
