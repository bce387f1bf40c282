//! Repository for the `locations` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location, PatchLocation, UpdateLocation};
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Typed column registry for filtering, searching, and sorting.
const TABLE: Table = Table {
    name: "locations",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "name", ty: ColumnType::Text },
        Column { name: "description", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the generated id.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO locations (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a location by id, projected to the requested field selection.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let value = to_json(&row)?;
        Ok(Some(selection.project(&value)))
    }

    /// List locations with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<Location>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<Location>().fetch_all(pool).await?)
    }

    /// Replace a location wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE locations SET name = $2, description = $3 WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchLocation,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE locations SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a location. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
