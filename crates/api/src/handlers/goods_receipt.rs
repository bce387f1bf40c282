//! Handlers for goods receipt endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::goods_receipt::{
    CreateGoodsReceipt, GoodsReceipt, PatchGoodsReceipt, UpdateGoodsReceipt,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::GoodsReceiptRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /goods-receipts
///
/// List goods receipts with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<GoodsReceipt>>>> {
    let req = params.into_request()?;
    let rows = GoodsReceiptRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /goods-receipts/{id}
///
/// Fetch a single goods receipt, projected to the requested fields. The
/// `location`, `purchase_order`, `items`, and `returns` navigations are
/// included only when `?fields=` references them.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = GoodsReceiptRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "GoodsReceipt", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /goods-receipts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGoodsReceipt>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = GoodsReceiptRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created goods receipt");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /goods-receipts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoodsReceipt>,
) -> AppResult<StatusCode> {
    if !GoodsReceiptRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "GoodsReceipt", id }.into());
    }
    tracing::info!(%id, "Updated goods receipt");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /goods-receipts/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchGoodsReceipt>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !GoodsReceiptRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "GoodsReceipt", id }.into());
    }
    tracing::info!(%id, "Patched goods receipt");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /goods-receipts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GoodsReceiptRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "GoodsReceipt", id }.into());
    }
    tracing::info!(%id, "Deleted goods receipt");
    Ok(StatusCode::NO_CONTENT)
}
