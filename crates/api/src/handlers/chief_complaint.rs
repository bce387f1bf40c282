//! Handlers for chief complaint endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::chief_complaint::{
    ChiefComplaint, CreateChiefComplaint, PatchChiefComplaint, UpdateChiefComplaint,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::ChiefComplaintRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /chief-complaints
///
/// List chief complaints with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<ChiefComplaint>>>> {
    let req = params.into_request()?;
    let rows = ChiefComplaintRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /chief-complaints/{id}
///
/// Fetch a single chief complaint, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = ChiefComplaintRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "ChiefComplaint", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /chief-complaints
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateChiefComplaint>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = ChiefComplaintRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created chief complaint");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /chief-complaints/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChiefComplaint>,
) -> AppResult<StatusCode> {
    if !ChiefComplaintRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "ChiefComplaint", id }.into());
    }
    tracing::info!(%id, "Updated chief complaint");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /chief-complaints/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchChiefComplaint>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !ChiefComplaintRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "ChiefComplaint", id }.into());
    }
    tracing::info!(%id, "Patched chief complaint");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /chief-complaints/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ChiefComplaintRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "ChiefComplaint", id }.into());
    }
    tracing::info!(%id, "Deleted chief complaint");
    Ok(StatusCode::NO_CONTENT)
}
