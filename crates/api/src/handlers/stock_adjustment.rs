//! Handlers for stock adjustment endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::stock_adjustment::{
    CreateStockAdjustment, PatchStockAdjustment, StockAdjustment, UpdateStockAdjustment,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::StockAdjustmentRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /stock-adjustments
///
/// List stock adjustments with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<StockAdjustment>>>> {
    let req = params.into_request()?;
    let rows = StockAdjustmentRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /stock-adjustments/{id}
///
/// Fetch a single stock adjustment, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = StockAdjustmentRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "StockAdjustment", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /stock-adjustments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStockAdjustment>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = StockAdjustmentRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created stock adjustment");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /stock-adjustments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStockAdjustment>,
) -> AppResult<StatusCode> {
    if !StockAdjustmentRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "StockAdjustment", id }.into());
    }
    tracing::info!(%id, "Updated stock adjustment");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /stock-adjustments/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchStockAdjustment>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !StockAdjustmentRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "StockAdjustment", id }.into());
    }
    tracing::info!(%id, "Patched stock adjustment");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /stock-adjustments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !StockAdjustmentRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "StockAdjustment", id }.into());
    }
    tracing::info!(%id, "Deleted stock adjustment");
    Ok(StatusCode::NO_CONTENT)
}
