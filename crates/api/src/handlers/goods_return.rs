//! Handlers for goods return endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::goods_return::{
    CreateGoodsReturn, GoodsReturn, PatchGoodsReturn, UpdateGoodsReturn,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::GoodsReturnRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /goods-returns
///
/// List goods returns with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<GoodsReturn>>>> {
    let req = params.into_request()?;
    let rows = GoodsReturnRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /goods-returns/{id}
///
/// Fetch a single goods return, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = GoodsReturnRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "GoodsReturn", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /goods-returns
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGoodsReturn>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = GoodsReturnRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created goods return");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /goods-returns/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoodsReturn>,
) -> AppResult<StatusCode> {
    if !GoodsReturnRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "GoodsReturn", id }.into());
    }
    tracing::info!(%id, "Updated goods return");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /goods-returns/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchGoodsReturn>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !GoodsReturnRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "GoodsReturn", id }.into());
    }
    tracing::info!(%id, "Patched goods return");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /goods-returns/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GoodsReturnRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "GoodsReturn", id }.into());
    }
    tracing::info!(%id, "Deleted goods return");
    Ok(StatusCode::NO_CONTENT)
}
