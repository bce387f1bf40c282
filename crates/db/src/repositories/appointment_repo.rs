//! Repository for the `appointments` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::appointment::{
    Appointment, CreateAppointment, PatchAppointment, UpdateAppointment,
};
use crate::models::appointment_service::AppointmentService;
use crate::models::chief_complaint::ChiefComplaint;
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{appointment_service_repo, chief_complaint_repo};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, patient_name, scheduled_at, status, reason, created_at, updated_at";

const TABLE: Table = Table {
    name: "appointments",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "patient_name", ty: ColumnType::Text },
        Column { name: "scheduled_at", ty: ColumnType::Timestamp },
        Column { name: "status", ty: ColumnType::Text },
        Column { name: "reason", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment, returning the generated id.
    ///
    /// `status` defaults to `'scheduled'`.
    pub async fn create(pool: &PgPool, input: &CreateAppointment) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO appointments (patient_name, scheduled_at, status, reason)
             VALUES ($1, $2, COALESCE($3, 'scheduled'), $4)
             RETURNING id",
        )
        .bind(&input.patient_name)
        .bind(input.scheduled_at)
        .bind(&input.status)
        .bind(&input.reason)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find an appointment by id, projected to the requested field selection.
    ///
    /// The `services` and `chief_complaints` collections are fetched only
    /// when the selection references them.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut value = to_json(&row)?;
        if let Value::Object(map) = &mut value {
            if selection.wants("services") {
                let query = format!(
                    "SELECT {} FROM appointment_services
                     WHERE appointment_id = $1 ORDER BY created_at ASC",
                    appointment_service_repo::COLUMNS
                );
                let rows = sqlx::query_as::<_, AppointmentService>(&query)
                    .bind(id)
                    .fetch_all(pool)
                    .await?;
                map.insert("services".to_string(), to_json(&rows)?);
            }
            if selection.wants("chief_complaints") {
                let query = format!(
                    "SELECT {} FROM chief_complaints
                     WHERE appointment_id = $1 ORDER BY created_at ASC",
                    chief_complaint_repo::COLUMNS
                );
                let rows = sqlx::query_as::<_, ChiefComplaint>(&query)
                    .bind(id)
                    .fetch_all(pool)
                    .await?;
                map.insert("chief_complaints".to_string(), to_json(&rows)?);
            }
        }

        Ok(Some(selection.project(&value)))
    }

    /// List appointments with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<Appointment>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<Appointment>().fetch_all(pool).await?)
    }

    /// Replace an appointment wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAppointment,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointments SET
                patient_name = $2, scheduled_at = $3, status = $4, reason = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.patient_name)
        .bind(input.scheduled_at)
        .bind(&input.status)
        .bind(&input.reason)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchAppointment,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointments SET
                patient_name = COALESCE($2, patient_name),
                scheduled_at = COALESCE($3, scheduled_at),
                status = COALESCE($4, status),
                reason = COALESCE($5, reason)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.patient_name)
        .bind(input.scheduled_at)
        .bind(&input.status)
        .bind(&input.reason)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an appointment and its dependent rows (cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
