//! Handlers for supplier endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::supplier::{CreateSupplier, PatchSupplier, Supplier, UpdateSupplier};
use emr_db::projection::FieldSelection;
use emr_db::repositories::SupplierRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /suppliers
///
/// List suppliers with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<Supplier>>>> {
    let req = params.into_request()?;
    let rows = SupplierRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /suppliers/{id}
///
/// Fetch a single supplier, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = SupplierRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "Supplier", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /suppliers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSupplier>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = SupplierRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created supplier");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /suppliers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupplier>,
) -> AppResult<StatusCode> {
    if !SupplierRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Supplier", id }.into());
    }
    tracing::info!(%id, "Updated supplier");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /suppliers/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchSupplier>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !SupplierRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Supplier", id }.into());
    }
    tracing::info!(%id, "Patched supplier");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /suppliers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SupplierRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "Supplier", id }.into());
    }
    tracing::info!(%id, "Deleted supplier");
    Ok(StatusCode::NO_CONTENT)
}
