//! Purchase order entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `purchase_orders` table.
///
/// `order_number` is unique (`uq_purchase_orders_order_number`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PurchaseOrder {
    pub id: DbId,
    pub supplier_id: DbId,
    pub order_number: String,
    pub ordered_at: Timestamp,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new purchase order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePurchaseOrder {
    pub supplier_id: DbId,
    pub order_number: String,
    /// Defaults to the current time if omitted.
    pub ordered_at: Option<Timestamp>,
    /// Defaults to `'draft'` if omitted.
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for replacing a purchase order (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePurchaseOrder {
    pub supplier_id: DbId,
    pub order_number: String,
    pub ordered_at: Timestamp,
    pub status: String,
    pub notes: Option<String>,
}

/// DTO for partially updating a purchase order (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchPurchaseOrder {
    pub supplier_id: Option<DbId>,
    pub order_number: Option<String>,
    pub ordered_at: Option<Timestamp>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
