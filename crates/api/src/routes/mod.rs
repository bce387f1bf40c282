pub mod account_settlement;
pub mod appointment;
pub mod appointment_service;
pub mod chief_complaint;
pub mod goods_receipt;
pub mod goods_receipt_item;
pub mod goods_return;
pub mod health;
pub mod item;
pub mod location;
pub mod purchase_order;
pub mod purchase_order_line;
pub mod service;
pub mod stock_adjustment;
pub mod supplier;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every entity exposes the same surface:
///
/// ```text
/// GET    /<entity>          list (filter/search/sort/paginate)
/// POST   /<entity>          create
/// GET    /<entity>/{id}     get by id (?fields= projection)
/// PUT    /<entity>/{id}     replace
/// PATCH  /<entity>/{id}     partial update
/// DELETE /<entity>/{id}     delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/locations", location::router())
        .nest("/items", item::router())
        .nest("/suppliers", supplier::router())
        .nest("/services", service::router())
        .nest("/appointments", appointment::router())
        .nest("/appointment-services", appointment_service::router())
        .nest("/chief-complaints", chief_complaint::router())
        .nest("/account-settlements", account_settlement::router())
        .nest("/purchase-orders", purchase_order::router())
        .nest("/purchase-order-lines", purchase_order_line::router())
        .nest("/goods-receipts", goods_receipt::router())
        .nest("/goods-receipt-items", goods_receipt_item::router())
        .nest("/goods-returns", goods_return::router())
        .nest("/stock-adjustments", stock_adjustment::router())
}
