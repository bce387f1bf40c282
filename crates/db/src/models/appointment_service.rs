//! Appointment-service line entity model and DTOs.
//!
//! One row per service rendered during an appointment, with the price as
//! charged at the time.

use emr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `appointment_services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppointmentService {
    pub id: DbId,
    pub appointment_id: DbId,
    pub service_id: DbId,
    pub quantity: i32,
    pub unit_price: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new appointment service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentService {
    pub appointment_id: DbId,
    pub service_id: DbId,
    /// Defaults to 1 if omitted.
    pub quantity: Option<i32>,
    pub unit_price: f64,
    pub notes: Option<String>,
}

/// DTO for replacing an appointment service (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointmentService {
    pub appointment_id: DbId,
    pub service_id: DbId,
    pub quantity: i32,
    pub unit_price: f64,
    pub notes: Option<String>,
}

/// DTO for partially updating an appointment service (PATCH).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchAppointmentService {
    pub appointment_id: Option<DbId>,
    pub service_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
    pub notes: Option<String>,
}
