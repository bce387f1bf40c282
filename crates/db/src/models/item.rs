//! Stock item entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
///
/// `code` is unique (`uq_items_code`); duplicate inserts surface as a
/// conflict at the API layer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub unit: String,
    pub reorder_level: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub code: String,
    pub name: String,
    /// Defaults to `'each'` if omitted.
    pub unit: Option<String>,
    /// Defaults to 0 if omitted.
    pub reorder_level: Option<i32>,
    pub description: Option<String>,
}

/// DTO for replacing an item (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub code: String,
    pub name: String,
    pub unit: String,
    pub reorder_level: i32,
    pub description: Option<String>,
}

/// DTO for partially updating an item (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchItem {
    pub code: Option<String>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub reorder_level: Option<i32>,
    pub description: Option<String>,
}
