//! HTTP handlers.
//!
//! One module per entity, each exposing the same six handlers: `list`,
//! `get_by_id`, `create`, `update`, `patch`, and `delete`.

pub mod account_settlement;
pub mod appointment;
pub mod appointment_service;
pub mod chief_complaint;
pub mod goods_receipt;
pub mod goods_receipt_item;
pub mod goods_return;
pub mod item;
pub mod location;
pub mod purchase_order;
pub mod purchase_order_line;
pub mod service;
pub mod stock_adjustment;
pub mod supplier;
