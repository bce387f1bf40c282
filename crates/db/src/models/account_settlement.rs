//! Account settlement entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `account_settlements` table. A payment settling charges
/// accrued against an appointment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountSettlement {
    pub id: DbId,
    pub appointment_id: DbId,
    pub settled_at: Timestamp,
    pub amount: f64,
    pub payment_method: String,
    pub reference_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new account settlement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountSettlement {
    pub appointment_id: DbId,
    /// Defaults to the current time if omitted.
    pub settled_at: Option<Timestamp>,
    pub amount: f64,
    pub payment_method: String,
    pub reference_number: Option<String>,
}

/// DTO for replacing an account settlement (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAccountSettlement {
    pub appointment_id: DbId,
    pub settled_at: Timestamp,
    pub amount: f64,
    pub payment_method: String,
    pub reference_number: Option<String>,
}

/// DTO for partially updating an account settlement (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchAccountSettlement {
    pub appointment_id: Option<DbId>,
    pub settled_at: Option<Timestamp>,
    pub amount: Option<f64>,
    pub payment_method: Option<String>,
    pub reference_number: Option<String>,
}
