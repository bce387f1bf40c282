//! Handlers for service endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::service::{CreateService, PatchService, Service, UpdateService};
use emr_db::projection::FieldSelection;
use emr_db::repositories::ServiceRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /services
///
/// List services with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let req = params.into_request()?;
    let rows = ServiceRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /services/{id}
///
/// Fetch a single service, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = ServiceRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "Service", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /services
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created service");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /services/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<StatusCode> {
    if !ServiceRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Service", id }.into());
    }
    tracing::info!(%id, "Updated service");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /services/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchService>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !ServiceRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Service", id }.into());
    }
    tracing::info!(%id, "Patched service");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /services/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "Service", id }.into());
    }
    tracing::info!(%id, "Deleted service");
    Ok(StatusCode::NO_CONTENT)
}
