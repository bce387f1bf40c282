//! Chief complaint entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `chief_complaints` table. The patient's presenting
/// complaint recorded against an appointment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChiefComplaint {
    pub id: DbId,
    pub appointment_id: DbId,
    pub complaint: String,
    pub onset: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chief complaint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChiefComplaint {
    pub appointment_id: DbId,
    pub complaint: String,
    pub onset: Option<String>,
    pub notes: Option<String>,
}

/// DTO for replacing a chief complaint (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChiefComplaint {
    pub appointment_id: DbId,
    pub complaint: String,
    pub onset: Option<String>,
    pub notes: Option<String>,
}

/// DTO for partially updating a chief complaint (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchChiefComplaint {
    pub appointment_id: Option<DbId>,
    pub complaint: Option<String>,
    pub onset: Option<String>,
    pub notes: Option<String>,
}
