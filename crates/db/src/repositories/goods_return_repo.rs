//! Repository for the `goods_returns` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::goods_receipt::GoodsReceipt;
use crate::models::goods_return::{
    CreateGoodsReturn, GoodsReturn, PatchGoodsReturn, UpdateGoodsReturn,
};
use crate::models::item::Item;
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::{goods_receipt_repo, item_repo};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, goods_receipt_id, item_id, quantity, returned_at, reason, created_at, updated_at";

const TABLE: Table = Table {
    name: "goods_returns",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "goods_receipt_id", ty: ColumnType::Uuid },
        Column { name: "item_id", ty: ColumnType::Uuid },
        Column { name: "quantity", ty: ColumnType::Integer },
        Column { name: "returned_at", ty: ColumnType::Timestamp },
        Column { name: "reason", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for goods returns.
pub struct GoodsReturnRepo;

impl GoodsReturnRepo {
    /// Insert a new goods return, returning the generated id.
    ///
    /// `returned_at` defaults to the current time.
    pub async fn create(pool: &PgPool, input: &CreateGoodsReturn) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO goods_returns (goods_receipt_id, item_id, quantity, returned_at, reason)
             VALUES ($1, $2, $3, COALESCE($4, NOW()), $5)
             RETURNING id",
        )
        .bind(input.goods_receipt_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.returned_at)
        .bind(&input.reason)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a goods return by id, projected to the requested fields.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM goods_returns WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, GoodsReturn>(&query)
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

    /// List goods returns with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<GoodsReturn>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<GoodsReturn>().fetch_all(pool).await?)
    }

    /// Replace a goods return wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGoodsReturn,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE goods_returns SET
                goods_receipt_id = $2, item_id = $3, quantity = $4,
                returned_at = $5, reason = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.goods_receipt_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.returned_at)
        .bind(&input.reason)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchGoodsReturn,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE goods_returns SET
                goods_receipt_id = COALESCE($2, goods_receipt_id),
                item_id = COALESCE($3, item_id),
                quantity = COALESCE($4, quantity),
                returned_at = COALESCE($5, returned_at),
                reason = COALESCE($6, reason)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.goods_receipt_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.returned_at)
        .bind(&input.reason)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a goods return. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goods_returns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
