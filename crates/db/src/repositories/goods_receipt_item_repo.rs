//! Repository for the `goods_receipt_items` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::goods_receipt::GoodsReceipt;
use crate::models::goods_receipt_item::{
    CreateGoodsReceiptItem, GoodsReceiptItem, PatchGoodsReceiptItem, UpdateGoodsReceiptItem,
};
use crate::models::item::Item;
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{goods_receipt_repo, item_repo};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, goods_receipt_id, item_id, quantity, unit_cost, created_at, updated_at";

const TABLE: Table = Table {
    name: "goods_receipt_items",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "goods_receipt_id", ty: ColumnType::Uuid },
        Column { name: "item_id", ty: ColumnType::Uuid },
        Column { name: "quantity", ty: ColumnType::Integer },
        Column { name: "unit_cost", ty: ColumnType::Double },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for goods receipt items.
pub struct GoodsReceiptItemRepo;

impl GoodsReceiptItemRepo {
    /// Insert a new receipt item, returning the generated id.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGoodsReceiptItem,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO goods_receipt_items (goods_receipt_id, item_id, quantity, unit_cost)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.goods_receipt_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.unit_cost)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a receipt item by id, projected to the requested fields.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM goods_receipt_items WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, GoodsReceiptItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut value = to_json(&row)?;
        if let Value::Object(map) = &mut value {
            if selection.wants("goods_receipt") {
                let query = format!(
                    "SELECT {} FROM goods_receipts WHERE id = $1",
                    goods_receipt_repo::COLUMNS
                );
                let parent = sqlx::query_as::<_, GoodsReceipt>(&query)
                    .bind(row.goods_receipt_id)
                    .fetch_optional(pool)
                    .await?;
                map.insert("goods_receipt".to_string(), to_json(&parent)?);
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

    /// List receipt items with filtering, search, sorting, and pagination.
    pub async fn list(
        pool: &PgPool,
        req: &ListRequest,
    ) -> Result<Vec<GoodsReceiptItem>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb
            .build_query_as::<GoodsReceiptItem>()
            .fetch_all(pool)
            .await?)
    }

    /// Replace a receipt item wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGoodsReceiptItem,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE goods_receipt_items SET
                goods_receipt_id = $2, item_id = $3, quantity = $4, unit_cost = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.goods_receipt_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.unit_cost)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchGoodsReceiptItem,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE goods_receipt_items SET
                goods_receipt_id = COALESCE($2, goods_receipt_id),
                item_id = COALESCE($3, item_id),
                quantity = COALESCE($4, quantity),
                unit_cost = COALESCE($5, unit_cost)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.goods_receipt_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.unit_cost)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a receipt item. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goods_receipt_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
