//! Medical service entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table. Billable procedures and consultations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}

/// DTO for replacing a service (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateService {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}

/// DTO for partially updating a service (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchService {
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}
