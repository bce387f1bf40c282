//! Repository for the `purchase_order_lines` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::item::Item;
use crate::models::purchase_order::PurchaseOrder;
use crate::models::purchase_order_line::{
    CreatePurchaseOrderLine, PatchPurchaseOrderLine, PurchaseOrderLine, UpdatePurchaseOrderLine,
};
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{item_repo, purchase_order_repo};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, purchase_order_id, item_id, quantity, unit_price, created_at, updated_at";

const TABLE: Table = Table {
    name: "purchase_order_lines",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "purchase_order_id", ty: ColumnType::Uuid },
        Column { name: "item_id", ty: ColumnType::Uuid },
        Column { name: "quantity", ty: ColumnType::Integer },
        Column { name: "unit_price", ty: ColumnType::Double },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for purchase order lines.
pub struct PurchaseOrderLineRepo;

impl PurchaseOrderLineRepo {
    /// Insert a new line, returning the generated id.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePurchaseOrderLine,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO purchase_order_lines (purchase_order_id, item_id, quantity, unit_price)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.purchase_order_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a line by id, projected to the requested fields.
    ///
    /// The `purchase_order` and `item` navigations are fetched only when the
    /// selection references them.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM purchase_order_lines WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, PurchaseOrderLine>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut value = to_json(&row)?;
        if let Value::Object(map) = &mut value {
            if selection.wants("purchase_order") {
                let query = format!(
                    "SELECT {} FROM purchase_orders WHERE id = $1",
                    purchase_order_repo::COLUMNS
                );
                let parent = sqlx::query_as::<_, PurchaseOrder>(&query)
                    .bind(row.purchase_order_id)
                    .fetch_optional(pool)
                    .await?;
                map.insert("purchase_order".to_string(), to_json(&parent)?);
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

    /// List lines with filtering, search, sorting, and pagination.
    pub async fn list(
        pool: &PgPool,
        req: &ListRequest,
    ) -> Result<Vec<PurchaseOrderLine>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb
            .build_query_as::<PurchaseOrderLine>()
            .fetch_all(pool)
            .await?)
    }

    /// Replace a line wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePurchaseOrderLine,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE purchase_order_lines SET
                purchase_order_id = $2, item_id = $3, quantity = $4, unit_price = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.purchase_order_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchPurchaseOrderLine,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE purchase_order_lines SET
                purchase_order_id = COALESCE($2, purchase_order_id),
                item_id = COALESCE($3, item_id),
                quantity = COALESCE($4, quantity),
                unit_price = COALESCE($5, unit_price)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.purchase_order_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a line. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM purchase_order_lines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
