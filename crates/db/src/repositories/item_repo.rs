//! Repository for the `items` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item, PatchItem, UpdateItem};
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, code, name, unit, reorder_level, description, created_at, updated_at";

const TABLE: Table = Table {
    name: "items",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "code", ty: ColumnType::Text },
        Column { name: "name", ty: ColumnType::Text },
        Column { name: "unit", ty: ColumnType::Text },
        Column { name: "reorder_level", ty: ColumnType::Integer },
        Column { name: "description", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for stock items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the generated id.
    ///
    /// `unit` defaults to `'each'` and `reorder_level` to 0.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO items (code, name, unit, reorder_level, description)
             VALUES ($1, $2, COALESCE($3, 'each'), COALESCE($4, 0), $5)
             RETURNING id",
        )
        .bind(&input.code)
        .bind(&input.name)
        .bind(&input.unit)
        .bind(input.reorder_level)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find an item by id, projected to the requested field selection.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let value = to_json(&row)?;
        Ok(Some(selection.project(&value)))
    }

    /// List items with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<Item>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<Item>().fetch_all(pool).await?)
    }

    /// Replace an item wholesale. Returns `false` if no row matched.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateItem) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE items SET
                code = $2, name = $3, unit = $4, reorder_level = $5, description = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.code)
        .bind(&input.name)
        .bind(&input.unit)
        .bind(input.reorder_level)
        .bind(&input.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(pool: &PgPool, id: DbId, input: &PatchItem) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE items SET
                code = COALESCE($2, code),
                name = COALESCE($3, name),
                unit = COALESCE($4, unit),
                reorder_level = COALESCE($5, reorder_level),
                description = COALESCE($6, description)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.code)
        .bind(&input.name)
        .bind(&input.unit)
        .bind(input.reorder_level)
        .bind(&input.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an item. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
