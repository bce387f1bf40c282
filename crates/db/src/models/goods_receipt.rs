//! Goods receipt entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `goods_receipts` table. A delivery of stock into a
/// location, optionally against a purchase order.
///
/// Navigations: `location`, `purchase_order`, and the `items` / `returns`
/// collections, fetched on demand during projection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GoodsReceipt {
    pub id: DbId,
    pub purchase_order_id: Option<DbId>,
    pub location_id: DbId,
    pub received_at: Timestamp,
    pub received_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new goods receipt.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoodsReceipt {
    pub purchase_order_id: Option<DbId>,
    pub location_id: DbId,
    /// Defaults to the current time if omitted.
    pub received_at: Option<Timestamp>,
    pub received_by: Option<String>,
    pub notes: Option<String>,
}

/// DTO for replacing a goods receipt (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoodsReceipt {
    pub purchase_order_id: Option<DbId>,
    pub location_id: DbId,
    pub received_at: Timestamp,
    pub received_by: Option<String>,
    pub notes: Option<String>,
}

/// DTO for partially updating a goods receipt (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchGoodsReceipt {
    pub purchase_order_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub received_at: Option<Timestamp>,
    pub received_by: Option<String>,
    pub notes: Option<String>,
}
