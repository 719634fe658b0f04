// src/handlers/monitoring.rs

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
    models::{
        monitoring::{
            CreateWasteManagementPayload, CreateWaterMonitoringPayload, WasteManagement,
            WaterMonitoring,
        },
        StatusFilter,
    },
};

// POST /api/water-monitoring
#[utoipa::path(
    post,
    path = "/api/water-monitoring",
    tag = "Monitoring",
    request_body = CreateWaterMonitoringPayload,
    responses(
        (status = 201, description = "Coleta registrada", body = WaterMonitoring),
        (status = 422, description = "Dados inválidos")
    )
)]
pub async fn create_water_monitoring(
    State(app_state): State<AppState>,
    locale: Locale,
    ValidJson(payload): ValidJson<CreateWaterMonitoringPayload>,
) -> Result<impl IntoResponse, ApiError> {

    let record = app_state
        .water_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(record)))
}

// GET /api/water-monitoring
#[utoipa::path(
    get,
    path = "/api/water-monitoring",
    tag = "Monitoring",
    params(
        ("tenant_id" = String, Query, description = "Identificador do tenant"),
        StatusFilter
    ),
    responses(
        (status = 200, description = "Coletas de água do tenant", body = Vec<WaterMonitoring>)
    )
)]
pub async fn list_water_monitoring(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    FilterQuery(filter): FilterQuery<StatusFilter>,
) -> Result<impl IntoResponse, ApiError> {

    let page = app_state
        .water_service
        .list(&tenant.0, &filter)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(page)
}

// GET /api/water-monitoring/{id}
#[utoipa::path(
    get,
    path = "/api/water-monitoring/{id}",
    tag = "Monitoring",
    params(
        ("id" = String, Path, description = "ID da coleta"),
        ("tenant_id" = String, Query, description = "Identificador do tenant")
    ),
    responses(
        (status = 200, description = "Coleta encontrada", body = WaterMonitoring),
        (status = 404, description = "Monitoramento de água não encontrado")
    )
)]
pub async fn get_water_monitoring(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let record = app_state
        .water_service
        .get_by_id(&tenant.0, &id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(record)))
}

// ---
// Resíduos
// ---

// POST /api/waste
#[utoipa::path(
    post,
    path = "/api/waste",
    tag = "Monitoring",
    request_body = CreateWasteManagementPayload,
    responses(
        (status = 201, description = "Resíduo registrado", body = WasteManagement),
        (status = 422, description = "Dados inválidos")
    )
)]
pub async fn create_waste(
    State(app_state): State<AppState>,
    locale: Locale,
    ValidJson(payload): ValidJson<CreateWasteManagementPayload>,
) -> Result<impl IntoResponse, ApiError> {

    let record = app_state
        .waste_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(record)))
}

// GET /api/waste
#[utoipa::path(
    get,
    path = "/api/waste",
    tag = "Monitoring",
    params(
        ("tenant_id" = String, Query, description = "Identificador do tenant"),
        StatusFilter
    ),
    responses(
        (status = 200, description = "Registros de resíduos do tenant", body = Vec<WasteManagement>)
    )
)]
pub async fn list_waste(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    FilterQuery(filter): FilterQuery<StatusFilter>,
) -> Result<impl IntoResponse, ApiError> {

    let page = app_state
        .waste_service
        .list(&tenant.0, &filter)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(page)
}

// GET /api/waste/{id}
#[utoipa::path(
    get,
    path = "/api/waste/{id}",
    tag = "Monitoring",
    params(
        ("id" = String, Path, description = "ID do registro"),
        ("tenant_id" = String, Query, description = "Identificador do tenant")
    ),
    responses(
        (status = 200, description = "Registro encontrado", body = WasteManagement),
        (status = 404, description = "Registro de resíduo não encontrado")
    )
)]
pub async fn get_waste(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let record = app_state
        .waste_service
        .get_by_id(&tenant.0, &id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(record)))
}
