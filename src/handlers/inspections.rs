// src/handlers/inspections.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{
        error::ApiError,
        extract::{FilterQuery, ValidJson},
    },
    config::AppState,
    middleware::{i18n::Locale, tenancy::TenantContext},
    models::inspection::{CreateInspectionPayload, Inspection, InspectionFilter},
};

// POST /api/inspections
#[utoipa::path(
    post,
    path = "/api/inspections",
    tag = "Inspections",
    request_body = CreateInspectionPayload,
    responses(
        (status = 201, description = "Vistoria registrada", body = Inspection),
        (status = 422, description = "Dados inválidos")
    )
)]
pub async fn create_inspection(
    State(app_state): State<AppState>,
    locale: Locale,
    ValidJson(payload): ValidJson<CreateInspectionPayload>,
) -> Result<impl IntoResponse, ApiError> {

    let inspection = app_state
        .inspection_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(inspection)))
}

// GET /api/inspections
#[utoipa::path(
    get,
    path = "/api/inspections",
    tag = "Inspections",
    params(
        ("tenant_id" = String, Query, description = "Identificador do tenant"),
        InspectionFilter
    ),
    responses(
        (status = 200, description = "Vistorias do tenant", body = Vec<Inspection>)
    )
)]
pub async fn list_inspections(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    FilterQuery(filter): FilterQuery<InspectionFilter>,
) -> Result<impl IntoResponse, ApiError> {

    let page = app_state
        .inspection_service
        .list(&tenant.0, &filter)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(page)
}

// GET /api/inspections/{id}
#[utoipa::path(
    get,
    path = "/api/inspections/{id}",
    tag = "Inspections",
    params(
        ("id" = String, Path, description = "ID da vistoria"),
        ("tenant_id" = String, Query, description = "Identificador do tenant")
    ),
    responses(
        (status = 200, description = "Vistoria encontrada", body = Inspection),
        (status = 404, description = "Vistoria não encontrada")
    )
)]
pub async fn get_inspection(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let inspection = app_state
        .inspection_service
        .get_by_id(&tenant.0, &id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(inspection)))
}
