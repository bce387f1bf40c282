//! Repository for the `stock_adjustments` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::item::Item;
use crate::models::location::Location;
use crate::models::stock_adjustment::{
    CreateStockAdjustment, PatchStockAdjustment, StockAdjustment, UpdateStockAdjustment,
};
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{item_repo, location_repo};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, location_id, item_id, adjusted_at, quantity_change, reason, created_at, updated_at";

const TABLE: Table = Table {
    name: "stock_adjustments",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "location_id", ty: ColumnType::Uuid },
        Column { name: "item_id", ty: ColumnType::Uuid },
        Column { name: "adjusted_at", ty: ColumnType::Timestamp },
        Column { name: "quantity_change", ty: ColumnType::Integer },
        Column { name: "reason", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for stock adjustments.
pub struct StockAdjustmentRepo;

impl StockAdjustmentRepo {
    /// Insert a new stock adjustment, returning the generated id.
    ///
    /// `adjusted_at` defaults to the current time.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStockAdjustment,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO stock_adjustments
                (location_id, item_id, adjusted_at, quantity_change, reason)
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5)
             RETURNING id",
        )
        .bind(input.location_id)
        .bind(input.item_id)
        .bind(input.adjusted_at)
        .bind(input.quantity_change)
        .bind(&input.reason)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a stock adjustment by id, projected to the requested fields.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM stock_adjustments WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, StockAdjustment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut value = to_json(&row)?;
        if let Value::Object(map) = &mut value {
            if selection.wants("location") {
                let query =
                    format!("SELECT {} FROM locations WHERE id = $1", location_repo::COLUMNS);
                let location = sqlx::query_as::<_, Location>(&query)
                    .bind(row.location_id)
                    .fetch_optional(pool)
                    .await?;
                map.insert("location".to_string(), to_json(&location)?);
            }
            if selection.wants("item") {
                let query = format!("SELECT {} FROM items WHERE id = $1", item_repo::COLUMNS);
                let item = sqlx::query_as::<_, Item>(&query)
                    .bind(row.item_id)
                    .fetch_optional(pool)
                    .await?;
                map.insert("item".to_string(), to_json(&item)?);
            }
        }

        Ok(Some(selection.project(&value)))
    }

    /// List stock adjustments with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<StockAdjustment>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb
            .build_query_as::<StockAdjustment>()
            .fetch_all(pool)
            .await?)
    }

    /// Replace a stock adjustment wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStockAdjustment,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE stock_adjustments SET
                location_id = $2, item_id = $3, adjusted_at = $4,
                quantity_change = $5, reason = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.location_id)
        .bind(input.item_id)
        .bind(input.adjusted_at)
        .bind(input.quantity_change)
        .bind(&input.reason)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchStockAdjustment,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE stock_adjustments SET
                location_id = COALESCE($2, location_id),
                item_id = COALESCE($3, item_id),
                adjusted_at = COALESCE($4, adjusted_at),
                quantity_change = COALESCE($5, quantity_change),
                reason = COALESCE($6, reason)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.location_id)
        .bind(input.item_id)
        .bind(input.adjusted_at)
        .bind(input.quantity_change)
        .bind(&input.reason)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a stock adjustment. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stock_adjustments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
