//! Handlers for purchase order endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::purchase_order::{
    CreatePurchaseOrder, PatchPurchaseOrder, PurchaseOrder, UpdatePurchaseOrder,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::PurchaseOrderRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /purchase-orders
///
/// List purchase orders with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<PurchaseOrder>>>> {
    let req = params.into_request()?;
    let rows = PurchaseOrderRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /purchase-orders/{id}
///
/// Fetch a single purchase order, projected to the requested fields. The
/// `supplier` navigation and `lines` collection are included only when
/// `?fields=` references them.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = PurchaseOrderRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "PurchaseOrder", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /purchase-orders
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePurchaseOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = PurchaseOrderRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created purchase order");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /purchase-orders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePurchaseOrder>,
) -> AppResult<StatusCode> {
    if !PurchaseOrderRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "PurchaseOrder", id }.into());
    }
    tracing::info!(%id, "Updated purchase order");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /purchase-orders/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchPurchaseOrder>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !PurchaseOrderRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "PurchaseOrder", id }.into());
    }
    tracing::info!(%id, "Patched purchase order");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /purchase-orders/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PurchaseOrderRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "PurchaseOrder", id }.into());
    }
    tracing::info!(%id, "Deleted purchase order");
    Ok(StatusCode::NO_CONTENT)
}
