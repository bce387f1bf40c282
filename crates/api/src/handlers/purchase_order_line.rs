//! Handlers for purchase order line endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::purchase_order_line::{
    CreatePurchaseOrderLine, PatchPurchaseOrderLine, PurchaseOrderLine, UpdatePurchaseOrderLine,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::PurchaseOrderLineRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /purchase-order-lines
///
/// List purchase order lines with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<PurchaseOrderLine>>>> {
    let req = params.into_request()?;
    let rows = PurchaseOrderLineRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /purchase-order-lines/{id}
///
/// Fetch a single purchase order line, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = PurchaseOrderLineRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "PurchaseOrderLine", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /purchase-order-lines
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePurchaseOrderLine>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = PurchaseOrderLineRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created purchase order line");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /purchase-order-lines/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePurchaseOrderLine>,
) -> AppResult<StatusCode> {
    if !PurchaseOrderLineRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "PurchaseOrderLine", id }.into());
    }
    tracing::info!(%id, "Updated purchase order line");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /purchase-order-lines/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchPurchaseOrderLine>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !PurchaseOrderLineRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "PurchaseOrderLine", id }.into());
    }
    tracing::info!(%id, "Patched purchase order line");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /purchase-order-lines/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PurchaseOrderLineRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "PurchaseOrderLine", id }.into());
    }
    tracing::info!(%id, "Deleted purchase order line");
    Ok(StatusCode::NO_CONTENT)
}
