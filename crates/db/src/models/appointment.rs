//! Appointment entity model and DTOs.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `appointments` table.
///
/// Navigation collections (`services`, `chief_complaints`) are fetched on
/// demand by the repository when a field selection references them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub patient_name: String,
    pub scheduled_at: Timestamp,
    pub status: String,
    pub reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new appointment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointment {
    pub patient_name: String,
    pub scheduled_at: Timestamp,
    /// Defaults to `'scheduled'` if omitted.
    pub status: Option<String>,
    pub reason: Option<String>,
}

/// DTO for replacing an appointment (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointment {
    pub patient_name: String,
    pub scheduled_at: Timestamp,
    pub status: String,
    pub reason: Option<String>,
}

/// DTO for partially updating an appointment (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchAppointment {
    pub patient_name: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub status: Option<String>,
    pub reason: Option<String>,
}
