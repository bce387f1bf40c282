//! Repository for the `goods_receipts` table.
//!
//! The richest navigation surface in the schema: a receipt references a
//! location and (optionally) a purchase order, and owns the received-item
//! and return collections.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::goods_receipt::{
    CreateGoodsReceipt, GoodsReceipt, PatchGoodsReceipt, UpdateGoodsReceipt,
};
use crate::models::goods_receipt_item::GoodsReceiptItem;
use crate::models::goods_return::GoodsReturn;
use crate::models::location::Location;
use crate::models::purchase_order::PurchaseOrder;
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{
    goods_receipt_item_repo, goods_return_repo, location_repo, purchase_order_repo,
};
use crate::DbError;

pub(crate) const COLUMNS: &str = "id, purchase_order_id, location_id, received_at, \
    received_by, notes, created_at, updated_at";

const TABLE: Table = Table {
    name: "goods_receipts",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "purchase_order_id", ty: ColumnType::Uuid },
        Column { name: "location_id", ty: ColumnType::Uuid },
        Column { name: "received_at", ty: ColumnType::Timestamp },
        Column { name: "received_by", ty: ColumnType::Text },
        Column { name: "notes", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for goods receipts.
pub struct GoodsReceiptRepo;

impl GoodsReceiptRepo {
    /// Insert a new goods receipt, returning the generated id.
    ///
    /// `received_at` defaults to the current time.
    pub async fn create(pool: &PgPool, input: &CreateGoodsReceipt) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO goods_receipts
                (purchase_order_id, location_id, received_at, received_by, notes)
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5)
             RETURNING id",
        )
        .bind(input.purchase_order_id)
        .bind(input.location_id)
        .bind(input.received_at)
        .bind(&input.received_by)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a goods receipt by id, projected to the requested fields.
    ///
    /// Navigations (`location`, `purchase_order`, `items`, `returns`) are
    /// fetched only when the selection references them. A receipt without a
    /// purchase order projects that navigation as null.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM goods_receipts WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, GoodsReceipt>(&query)
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
            if selection.wants("purchase_order") {
                let order = match row.purchase_order_id {
                    Some(order_id) => {
                        let query = format!(
                            "SELECT {} FROM purchase_orders WHERE id = $1",
                            purchase_order_repo::COLUMNS
                        );
                        sqlx::query_as::<_, PurchaseOrder>(&query)
                            .bind(order_id)
                            .fetch_optional(pool)
                            .await?
                    }
                    None => None,
                };
                map.insert("purchase_order".to_string(), to_json(&order)?);
            }
            if selection.wants("items") {
                let query = format!(
                    "SELECT {} FROM goods_receipt_items
                     WHERE goods_receipt_id = $1 ORDER BY created_at ASC",
                    goods_receipt_item_repo::COLUMNS
                );
                let items = sqlx::query_as::<_, GoodsReceiptItem>(&query)
                    .bind(id)
                    .fetch_all(pool)
                    .await?;
                map.insert("items".to_string(), to_json(&items)?);
            }
            if selection.wants("returns") {
                let query = format!(
                    "SELECT {} FROM goods_returns
                     WHERE goods_receipt_id = $1 ORDER BY created_at ASC",
                    goods_return_repo::COLUMNS
                );
                let returns = sqlx::query_as::<_, GoodsReturn>(&query)
                    .bind(id)
                    .fetch_all(pool)
                    .await?;
                map.insert("returns".to_string(), to_json(&returns)?);
            }
        }

        Ok(Some(selection.project(&value)))
    }

    /// List goods receipts with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<GoodsReceipt>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<GoodsReceipt>().fetch_all(pool).await?)
    }

    /// Replace a goods receipt wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGoodsReceipt,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE goods_receipts SET
                purchase_order_id = $2, location_id = $3, received_at = $4,
                received_by = $5, notes = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.purchase_order_id)
        .bind(input.location_id)
        .bind(input.received_at)
        .bind(&input.received_by)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchGoodsReceipt,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE goods_receipts SET
                purchase_order_id = COALESCE($2, purchase_order_id),
                location_id = COALESCE($3, location_id),
                received_at = COALESCE($4, received_at),
                received_by = COALESCE($5, received_by),
                notes = COALESCE($6, notes)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.purchase_order_id)
        .bind(input.location_id)
        .bind(input.received_at)
        .bind(&input.received_by)
        .bind(&input.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a goods receipt and its item/return rows (cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goods_receipts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
