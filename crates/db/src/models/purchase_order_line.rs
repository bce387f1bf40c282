//! Purchase order line entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `purchase_order_lines` table. Deleted with its parent
/// order (cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PurchaseOrderLine {
    pub id: DbId,
    pub purchase_order_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub unit_price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new purchase order line.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePurchaseOrderLine {
    pub purchase_order_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub unit_price: f64,
}

/// DTO for replacing a purchase order line (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePurchaseOrderLine {
    pub purchase_order_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub unit_price: f64,
}

/// DTO for partially updating a purchase order line (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchPurchaseOrderLine {
    pub purchase_order_id: Option<DbId>,
    pub item_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
}
