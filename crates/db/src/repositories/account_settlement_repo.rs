//! Repository for the `account_settlements` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::account_settlement::{
    AccountSettlement, CreateAccountSettlement, PatchAccountSettlement, UpdateAccountSettlement,
};
use crate::models::appointment::Appointment;
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::repositories::appointment_repo;
use crate::DbError;

pub(crate) const COLUMNS: &str = "id, appointment_id, settled_at, amount, payment_method, \
    reference_number, created_at, updated_at";

const TABLE: Table = Table {
    name: "account_settlements",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "appointment_id", ty: ColumnType::Uuid },
        Column { name: "settled_at", ty: ColumnType::Timestamp },
        Column { name: "amount", ty: ColumnType::Double },
        Column { name: "payment_method", ty: ColumnType::Text },
        Column { name: "reference_number", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for account settlements.
pub struct AccountSettlementRepo;

impl AccountSettlementRepo {
    /// Insert a new settlement, returning the generated id.
    ///
    /// `settled_at` defaults to the current time.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAccountSettlement,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO account_settlements
                (appointment_id, settled_at, amount, payment_method, reference_number)
             VALUES ($1, COALESCE($2, NOW()), $3, $4, $5)
             RETURNING id",
        )
        .bind(input.appointment_id)
        .bind(input.settled_at)
        .bind(input.amount)
        .bind(&input.payment_method)
        .bind(&input.reference_number)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a settlement by id, projected to the requested fields.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM account_settlements WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, AccountSettlement>(&query)
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

    /// List settlements with filtering, search, sorting, and pagination.
    pub async fn list(
        pool: &PgPool,
        req: &ListRequest,
    ) -> Result<Vec<AccountSettlement>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb
            .build_query_as::<AccountSettlement>()
            .fetch_all(pool)
            .await?)
    }

    /// Replace a settlement wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAccountSettlement,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE account_settlements SET
                appointment_id = $2, settled_at = $3, amount = $4,
                payment_method = $5, reference_number = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.appointment_id)
        .bind(input.settled_at)
        .bind(input.amount)
        .bind(&input.payment_method)
        .bind(&input.reference_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchAccountSettlement,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE account_settlements SET
                appointment_id = COALESCE($2, appointment_id),
                settled_at = COALESCE($3, settled_at),
                amount = COALESCE($4, amount),
                payment_method = COALESCE($5, payment_method),
                reference_number = COALESCE($6, reference_number)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.appointment_id)
        .bind(input.settled_at)
        .bind(input.amount)
        .bind(&input.payment_method)
        .bind(&input.reference_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a settlement. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM account_settlements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
