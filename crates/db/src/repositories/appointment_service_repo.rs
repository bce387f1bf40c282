//! Repository for the `appointment_services` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::appointment::Appointment;
use crate::models::appointment_service::{
    AppointmentService, CreateAppointmentService, PatchAppointmentService,
    UpdateAppointmentService,
};
use crate::models::service::Service;
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{appointment_repo, service_repo};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, appointment_id, service_id, quantity, unit_price, notes, created_at, updated_at";

const TABLE: Table = Table {
    name: "appointment_services",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "appointment_id", ty: ColumnType::Uuid },
        Column { name: "service_id", ty: ColumnType::Uuid },
        Column { name: "quantity", ty: ColumnType::Integer },
        Column { name: "unit_price", ty: ColumnType::Double },
        Column { name: "notes", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for appointment service lines.
pub struct AppointmentServiceRepo;

impl AppointmentServiceRepo {
    /// Insert a new appointment service, returning the generated id.
    ///
    /// `quantity` defaults to 1.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAppointmentService,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO appointment_services
                (appointment_id, service_id, quantity, unit_price, notes)
             VALUES ($1, $2, COALESCE($3, 1), $4, $5)
             RETURNING id",
        )
        .bind(input.appointment_id)
        .bind(input.service_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find an appointment service by id, projected to the requested fields.
    ///
    /// The `appointment` and `service` navigations are fetched only when the
    /// selection references them.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM appointment_services WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, AppointmentService>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut value = to_json(&row)?;
        if let Value::Object(map) = &mut value {
            if selection.wants("appointment") {
                let query = format!(
                    "SELECT {} FROM appointments WHERE id = $1",
                    appointment_repo::COLUMNS
                );
                let parent = sqlx::query_as::<_, Appointment>(&query)
                    .bind(row.appointment_id)
                    .fetch_optional(pool)
                    .await?;
                map.insert("appointment".to_string(), to_json(&parent)?);
            }
            if selection.wants("service") {
                let query =
                    format!("SELECT {} FROM services WHERE id = $1", service_repo::COLUMNS);
                let service = sqlx::query_as::<_, Service>(&query)
                    .bind(row.service_id)
                    .fetch_optional(pool)
                    .await?;
                map.insert("service".to_string(), to_json(&service)?);
            }
        }

        Ok(Some(selection.project(&value)))
    }

    /// List appointment services with filtering, search, sorting, and
    /// pagination.
    pub async fn list(
        pool: &PgPool,
        req: &ListRequest,
    ) -> Result<Vec<AppointmentService>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb
            .build_query_as::<AppointmentService>()
            .fetch_all(pool)
            .await?)
    }

    /// Replace an appointment service wholesale. Returns `false` if no row
    /// matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAppointmentService,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointment_services SET
                appointment_id = $2, service_id = $3, quantity = $4,
                unit_price = $5, notes = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.appointment_id)
        .bind(input.service_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchAppointmentService,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointment_services SET
                appointment_id = COALESCE($2, appointment_id),
                service_id = COALESCE($3, service_id),
                quantity = COALESCE($4, quantity),
                unit_price = COALESCE($5, unit_price),
                notes = COALESCE($6, notes)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.appointment_id)
        .bind(input.service_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an appointment service. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointment_services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
