//! Route definitions for stock adjustment endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::stock_adjustment;
use crate::state::AppState;

/// Routes mounted at `/stock-adjustments`.
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
        .route("/", get(stock_adjustment::list).post(stock_adjustment::create))
        .route(
            "/{id}",
            get(stock_adjustment::get_by_id)
                .put(stock_adjustment::update)
                .patch(stock_adjustment::patch)
                .delete(stock_adjustment::delete),
        )
}
