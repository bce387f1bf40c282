//! Location entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `locations` table. Stores, wards, and dispensaries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for replacing a location (PUT). All mutable columns are set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLocation {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for partially updating a location (PATCH). Absent fields keep their
/// current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchLocation {
    pub name: Option<String>,
    pub description: Option<String>,
}
