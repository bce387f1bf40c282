//! Handlers for account settlement endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use emr_core::error::CoreError;
use emr_core::paging::RawListParams;
use emr_core::types::DbId;
use emr_db::models::account_settlement::{
    AccountSettlement, CreateAccountSettlement, PatchAccountSettlement, UpdateAccountSettlement,
};
use emr_db::projection::FieldSelection;
use emr_db::repositories::AccountSettlementRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::FieldsParam;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /account-settlements
///
/// List account settlements with filtering, search, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RawListParams>,
) -> AppResult<Json<DataResponse<Vec<AccountSettlement>>>> {
    let req = params.into_request()?;
    let rows = AccountSettlementRepo::list(&state.pool, &req).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /account-settlements/{id}
///
/// Fetch a single account settlement, projected to the requested fields.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParam>,
) -> AppResult<Json<DataResponse<Value>>> {
    let selection = FieldSelection::parse(params.fields.as_deref());
    let value = AccountSettlementRepo::find_by_id(&state.pool, id, &selection)
        .await?
        .ok_or(CoreError::NotFound { entity: "AccountSettlement", id })?;
    Ok(Json(DataResponse { data: value }))
}

/// POST /account-settlements
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAccountSettlement>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedResponse>>)> {
    let id = AccountSettlementRepo::create(&state.pool, &input).await?;
    tracing::info!(%id, "Created account settlement");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /account-settlements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAccountSettlement>,
) -> AppResult<StatusCode> {
    if !AccountSettlementRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "AccountSettlement", id }.into());
    }
    tracing::info!(%id, "Updated account settlement");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /account-settlements/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<PatchAccountSettlement>>,
) -> AppResult<StatusCode> {
    let Some(Json(input)) = body else {
        return Err(AppError::BadRequest(
            "patch document is required".to_string(),
        ));
    };
    if !AccountSettlementRepo::patch(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: "AccountSettlement", id }.into());
    }
    tracing::info!(%id, "Patched account settlement");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /account-settlements/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AccountSettlementRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "AccountSettlement", id }.into());
    }
    tracing::info!(%id, "Deleted account settlement");
    Ok(StatusCode::NO_CONTENT)
}
