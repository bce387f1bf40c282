//! Handlers for appointment endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::appointment::{
    Appointment, CreateAppointment, PatchAppointment, UpdateAppointment,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::AppointmentRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /appointments
///
/// List appointments with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<Appointment>>>> {
    let req = params.into_request()?;
    let rows = AppointmentRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /appointments/{id}
///
/// Fetch a single appointment, projected to the requested fields. The
/// `services` and `chief_complaints` collections are included only when
/// `?fields=` references them.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = AppointmentRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "Appointment", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /appointments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = AppointmentRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created appointment");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /appointments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAppointment>,
) -> AppResult<StatusCode> {
    if !AppointmentRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Appointment", id }.into());
    }
    tracing::info!(%id, "Updated appointment");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /appointments/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchAppointment>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !AppointmentRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "Appointment", id }.into());
    }
    tracing::info!(%id, "Patched appointment");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /appointments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AppointmentRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "Appointment", id }.into());
    }
    tracing::info!(%id, "Deleted appointment");
    Ok(StatusCode::NO_CONTENT)
}
