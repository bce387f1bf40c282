//! Route definitions for goods return endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::goods_return;
use crate::state::AppState;

/// Routes mounted at `/goods-returns`.
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
        .route("/", get(goods_return::list).post(goods_return::create))
        .route(
            "/{id}",
            get(goods_return::get_by_id)
                .put(goods_return::update)
                .patch(goods_return::patch)
                .delete(goods_return::delete),
        )
}
