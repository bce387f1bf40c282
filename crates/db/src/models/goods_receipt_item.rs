//! Goods receipt item entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `goods_receipt_items` table. One received stock line;
/// deleted with its parent receipt (cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GoodsReceiptItem {
    pub id: DbId,
    pub goods_receipt_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub unit_cost: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new goods receipt item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoodsReceiptItem {
    pub goods_receipt_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub unit_cost: f64,
}

/// DTO for replacing a goods receipt item (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoodsReceiptItem {
    pub goods_receipt_id: DbId,
    pub item_id: DbId,
    pub quantity: i32,
    pub unit_cost: f64,
}

/// DTO for partially updating a goods receipt item (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchGoodsReceiptItem {
    pub goods_receipt_id: Option<DbId>,
    pub item_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub unit_cost: Option<f64>,
}
