//! Repository for the `purchase_orders` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::purchase_order::{
    CreatePurchaseOrder, PatchPurchaseOrder, PurchaseOrder, UpdatePurchaseOrder,
};
use crate::models::purchase_order_line::PurchaseOrderLine;
use crate::models::supplier::Supplier;
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{purchase_order_line_repo, supplier_repo};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, supplier_id, order_number, ordered_at, status, notes, created_at, updated_at";

const TABLE: Table = Table {
    name: "purchase_orders",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "supplier_id", ty: ColumnType::Uuid },
        Column { name: "order_number", ty: ColumnType::Text },
        Column { name: "ordered_at", ty: ColumnType::Timestamp },
        Column { name: "status", ty: ColumnType::Text },
        Column { name: "notes", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for purchase orders.
pub struct PurchaseOrderRepo;

impl PurchaseOrderRepo {
    /// Insert a new purchase order, returning the generated id.
    ///
    /// `ordered_at` defaults to the current time and `status` to `'draft'`.
    pub async fn create(pool: &PgPool, input: &CreatePurchaseOrder) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO purchase_orders (supplier_id, order_number, ordered_at, status, notes)
             VALUES ($1, $2, COALESCE($3, NOW()), COALESCE($4, 'draft'), $5)
             RETURNING id",
        )
        .bind(input.supplier_id)
        .bind(&input.order_number)
        .bind(input.ordered_at)
        .bind(&input.status)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a purchase order by id, projected to the requested fields.
    ///
    /// The `supplier` navigation and `lines` collection are fetched only when
    /// the selection references them.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM purchase_orders WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, PurchaseOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut value = to_json(&row)?;
        if let Value::Object(map) = &mut value {
            if selection.wants("supplier") {
                let query =
                    format!("SELECT {} FROM suppliers WHERE id = $1", supplier_repo::COLUMNS);
                let supplier = sqlx::query_as::<_, Supplier>(&query)
                    .bind(row.supplier_id)
                    .fetch_optional(pool)
                    .await?;
                map.insert("supplier".to_string(), to_json(&supplier)?);
            }
            if selection.wants("lines") {
                let query = format!(
                    "SELECT {} FROM purchase_order_lines
                     WHERE purchase_order_id = $1 ORDER BY created_at ASC",
                    purchase_order_line_repo::COLUMNS
                );
                let lines = sqlx::query_as::<_, PurchaseOrderLine>(&query)
                    .bind(id)
                    .fetch_all(pool)
                    .await?;
                map.insert("lines".to_string(), to_json(&lines)?);
            }
        }

        Ok(Some(selection.project(&value)))
    }

    /// List purchase orders with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<PurchaseOrder>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<PurchaseOrder>().fetch_all(pool).await?)
    }

    /// Replace a purchase order wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePurchaseOrder,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE purchase_orders SET
                supplier_id = $2, order_number = $3, ordered_at = $4, status = $5, notes = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.supplier_id)
        .bind(&input.order_number)
        .bind(input.ordered_at)
        .bind(&input.status)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchPurchaseOrder,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE purchase_orders SET
                supplier_id = COALESCE($2, supplier_id),
                order_number = COALESCE($3, order_number),
                ordered_at = COALESCE($4, ordered_at),
                status = COALESCE($5, status),
                notes = COALESCE($6, notes)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.supplier_id)
        .bind(&input.order_number)
        .bind(input.ordered_at)
        .bind(&input.status)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a purchase order and its lines (cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM purchase_orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
