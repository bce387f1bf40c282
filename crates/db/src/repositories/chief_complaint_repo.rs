//! Repository for the `chief_complaints` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::appointment::Appointment;
use crate::models::chief_complaint::{
    ChiefComplaint, CreateChiefComplaint, PatchChiefComplaint, UpdateChiefComplaint,
};
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::appointment_repo;
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, appointment_id, complaint, onset, notes, created_at, updated_at";

const TABLE: Table = Table {
    name: "chief_complaints",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "appointment_id", ty: ColumnType::Uuid },
        Column { name: "complaint", ty: ColumnType::Text },
        Column { name: "onset", ty: ColumnType::Text },
        Column { name: "notes", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for chief complaints.
pub struct ChiefComplaintRepo;

impl ChiefComplaintRepo {
    /// Insert a new chief complaint, returning the generated id.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChiefComplaint,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO chief_complaints (appointment_id, complaint, onset, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.appointment_id)
        .bind(&input.complaint)
        .bind(&input.onset)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a chief complaint by id, projected to the requested fields.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM chief_complaints WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, ChiefComplaint>(&query)
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
        }

        Ok(Some(selection.project(&value)))
    }

    /// List chief complaints with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<ChiefComplaint>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<ChiefComplaint>().fetch_all(pool).await?)
    }

    /// Replace a chief complaint wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChiefComplaint,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE chief_complaints SET
                appointment_id = $2, complaint = $3, onset = $4, notes = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.appointment_id)
        .bind(&input.complaint)
        .bind(&input.onset)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchChiefComplaint,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE chief_complaints SET
                appointment_id = COALESCE($2, appointment_id),
                complaint = COALESCE($3, complaint),
                onset = COALESCE($4, onset),
                notes = COALESCE($5, notes)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.appointment_id)
        .bind(&input.complaint)
        .bind(&input.onset)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a chief complaint. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chief_complaints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
