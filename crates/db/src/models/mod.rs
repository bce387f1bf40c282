//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for wholesale replacement (PUT)
//! - A `Deserialize` patch DTO (all `Option` fields) for partial updates

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
