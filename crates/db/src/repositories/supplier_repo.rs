//! Repository for the `suppliers` table.

use emr_core::paging::ListRequest;
use emr_core::types::DbId;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::supplier::{CreateSupplier, PatchSupplier, Supplier, UpdateSupplier};
use crate::projection::{to_json, FieldSelection};
use crate::query::{build_list_query, Column, ColumnType, Table};
use crate::DbError;

pub(crate) const COLUMNS: &str =
    "id, name, contact_person, email, phone, created_at, updated_at";

const TABLE: Table = Table {
    name: "suppliers",
    columns: &[
        Column { name: "id", ty: ColumnType::Uuid },
        Column { name: "name", ty: ColumnType::Text },
        Column { name: "contact_person", ty: ColumnType::Text },
        Column { name: "email", ty: ColumnType::Text },
        Column { name: "phone", ty: ColumnType::Text },
        Column { name: "created_at", ty: ColumnType::Timestamp },
        Column { name: "updated_at", ty: ColumnType::Timestamp },
    ],
};

/// Provides CRUD operations for suppliers.
pub struct SupplierRepo;

impl SupplierRepo {
    /// Insert a new supplier, returning the generated id.
    pub async fn create(pool: &PgPool, input: &CreateSupplier) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO suppliers (name, contact_person, email, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a supplier by id, projected to the requested field selection.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        selection: &FieldSelection,
    ) -> Result<Option<Value>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let value = to_json(&row)?;
        Ok(Some(selection.project(&value)))
    }

    /// List suppliers with filtering, search, sorting, and pagination.
    pub async fn list(pool: &PgPool, req: &ListRequest) -> Result<Vec<Supplier>, DbError> {
        let mut qb = build_list_query(&TABLE, COLUMNS, req)?;
        Ok(qb.build_query_as::<Supplier>().fetch_all(pool).await?)
    }

    /// Replace a supplier wholesale. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupplier,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE suppliers SET
                name = $2, contact_person = $3, email = $4, phone = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a partial update. Only non-`None` fields are changed.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchSupplier,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE suppliers SET
                name = COALESCE($2, name),
                contact_person = COALESCE($3, contact_person),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a supplier. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
