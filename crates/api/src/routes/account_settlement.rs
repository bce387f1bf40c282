//! Route definitions for account settlement endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::account_settlement;
use crate::state::AppState;

/// Routes mounted at `/account-settlements`.
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
        .route("/", get(account_settlement::list).post(account_settlement::create))
        .route(
            "/{id}",
            get(account_settlement::get_by_id)
                .put(account_settlement::update)
                .patch(account_settlement::patch)
                .delete(account_settlement::delete),
        )
}
