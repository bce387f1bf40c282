//! Handlers for location endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::location::{CreateLocation, Location, PatchLocation, UpdateLocation};
use emr_db::projection::FieldSelection;
use emr_db::repositories::LocationRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /locations
///
/// List locations with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<Location>>>> {
    let req = params.into_request()?;
    let rows = LocationRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /locations/{id}
///
/// Fetch a single location, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = LocationRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "Location", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /locations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = LocationRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created location");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /locations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<StatusCode> {
    if !LocationRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Location", id }.into());
    }
    tracing::info!(%id, "Updated location");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /locations/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchLocation>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !LocationRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Location", id }.into());
    }
    tracing::info!(%id, "Patched location");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /locations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !LocationRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "Location", id }.into());
    }
    tracing::info!(%id, "Deleted location");
    Ok(StatusCode::NO_CONTENT)
}
