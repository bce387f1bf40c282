//! Handlers for item endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::item::{CreateItem, Item, PatchItem, UpdateItem};
use emr_db::projection::FieldSelection;
use emr_db::repositories::ItemRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /items
///
/// List items with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<Item>>>> {
    let req = params.into_request()?;
    let rows = ItemRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /items/{id}
///
/// Fetch a single item, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = ItemRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "Item", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created item");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<StatusCode> {
    if !ItemRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Item", id }.into());
    }
    tracing::info!(%id, "Updated item");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /items/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchItem>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !ItemRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Item", id }.into());
    }
    tracing::info!(%id, "Patched item");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ItemRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "Item", id }.into());
    }
    tracing::info!(%id, "Deleted item");
    Ok(StatusCode::NO_CONTENT)
}
