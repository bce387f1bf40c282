//! Stock adjustment entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `stock_adjustments` table. A manual correction to the
/// quantity of an item at a location (damage, count variance, expiry).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StockAdjustment {
    pub id: DbId,
    pub location_id: DbId,
    pub item_id: DbId,
    pub adjusted_at: Timestamp,
    /// Signed delta; negative values remove stock.
    pub quantity_change: i32,
    pub reason: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new stock adjustment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStockAdjustment {
    pub location_id: DbId,
    pub item_id: DbId,
    /// Defaults to the current time if omitted.
    pub adjusted_at: Option<Timestamp>,
    pub quantity_change: i32,
    pub reason: String,
}

/// DTO for replacing a stock adjustment (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStockAdjustment {
    pub location_id: DbId,
    pub item_id: DbId,
    pub adjusted_at: Timestamp,
    pub quantity_change: i32,
    pub reason: String,
}

/// DTO for partially updating a stock adjustment (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchStockAdjustment {
    pub location_id: Option<DbId>,
    pub item_id: Option<DbId>,
    pub adjusted_at: Option<Timestamp>,
    pub quantity_change: Option<i32>,
    pub reason: Option<String>,
}
