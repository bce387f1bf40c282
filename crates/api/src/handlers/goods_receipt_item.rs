//! Handlers for goods receipt item endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::goods_receipt_item::{
    CreateGoodsReceiptItem, GoodsReceiptItem, PatchGoodsReceiptItem, UpdateGoodsReceiptItem,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::GoodsReceiptItemRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /goods-receipt-items
///
/// List goods receipt items with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<GoodsReceiptItem>>>> {
    let req = params.into_request()?;
    let rows = GoodsReceiptItemRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /goods-receipt-items/{id}
///
/// Fetch a single goods receipt item, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = GoodsReceiptItemRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "GoodsReceiptItem", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /goods-receipt-items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGoodsReceiptItem>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = GoodsReceiptItemRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created goods receipt item");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /goods-receipt-items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoodsReceiptItem>,
) -> AppResult<StatusCode> {
    if !GoodsReceiptItemRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "GoodsReceiptItem", id }.into());
    }
    tracing::info!(%id, "Updated goods receipt item");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /goods-receipt-items/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchGoodsReceiptItem>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !GoodsReceiptItemRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "GoodsReceiptItem", id }.into());
    }
    tracing::info!(%id, "Patched goods receipt item");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /goods-receipt-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GoodsReceiptItemRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "GoodsReceiptItem", id }.into());
    }
    tracing::info!(%id, "Deleted goods receipt item");
    Ok(StatusCode::NO_CONTENT)
}
