//! Goods return entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `goods_returns` table. Stock sent back to the supplier
/// against a receipt; deleted with its parent receipt (cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GoodsReturn {
    pub id: DbId,
    pub goods_receipt_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub returned_at: Timestamp,
    pub reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new goods return.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoodsReturn {
    pub goods_receipt_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    /// Defaults to the current time if omitted.
    pub returned_at: Option<Timestamp>,
    pub reason: Option<String>,
}

/// DTO for replacing a goods return (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoodsReturn {
    pub goods_receipt_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub returned_at: Timestamp,
    pub reason: Option<String>,
}

/// DTO for partially updating a goods return (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchGoodsReturn {
    pub goods_receipt_id: Option<DbId>,
    pub item_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub returned_at: Option<Timestamp>,
    pub reason: Option<String>,
}
