//! Repository for the `services` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::service::{CreateService, PatchService, Service, UpdateService};
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, code, name, price, duration_minutes, description, created_at, updated_at";

const TABLE: Table = Table {
    name: "services",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "code", ty: ColumnType::Text },
        Column { name: "name", ty: ColumnType::Text },
        Column { name: "price", ty: ColumnType::Double },
        Column { name: "duration_minutes", ty: ColumnType::Integer },
        Column { name: "description", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for billable services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the generated id.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO services (code, name, price, duration_minutes, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.code)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.duration_minutes)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a service by id, projected to the requested field selection.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let value = to_json(&row)?;
        Ok(Some(selection.project(&value)))
    }

    /// List services with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<Service>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<Service>().fetch_all(pool).await?)
    }

    /// Replace a service wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE services SET
                code = $2, name = $3, price = $4, duration_minutes = $5, description = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.code)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.duration_minutes)
        .bind(&input.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchService,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE services SET
                code = COALESCE($2, code),
                name = COALESCE($3, name),
                price = COALESCE($4, price),
                duration_minutes = COALESCE($5, duration_minutes),
                description = COALESCE($6, description)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.code)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.duration_minutes)
        .bind(&input.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a service. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
