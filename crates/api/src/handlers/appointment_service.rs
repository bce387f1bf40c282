//! Handlers for appointment service endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::appointment_service::{
    AppointmentService, CreateAppointmentService, PatchAppointmentService, UpdateAppointmentService,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::AppointmentServiceRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /appointment-services
///
/// List appointment services with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<AppointmentService>>>> {
    let req = params.into_request()?;
    let rows = AppointmentServiceRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /appointment-services/{id}
///
/// Fetch a single appointment service, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = AppointmentServiceRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "AppointmentService", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /appointment-services
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAppointmentService>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = AppointmentServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created appointment service");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /appointment-services/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAppointmentService>,
) -> AppResult<StatusCode> {
    if !AppointmentServiceRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "AppointmentService", id }.into());
    }
    tracing::info!(%id, "Updated appointment service");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /appointment-services/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchAppointmentService>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !AppointmentServiceRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "AppointmentService", id }.into());
    }
    tracing::info!(%id, "Patched appointment service");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /appointment-services/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AppointmentServiceRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "AppointmentService", id }.into());
    }
    tracing::info!(%id, "Deleted appointment service");
    Ok(StatusCode::NO_CONTENT)
}
