// src/handlers/licenses.rs

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
    models::license::{CreateLicensePayload, License, LicenseFilter},
};

// POST /api/licenses
#[utoipa::path(
    post,
    path = "/api/licenses",
    tag = "Licenses",
    request_body = CreateLicensePayload,
    responses(
        (status = 201, description = "Licença criada", body = License),
        (status = 422, description = "Campos ausentes ou valor fora do enum")
    )
)]
pub async fn create_license(
    State(app_state): State<AppState>,
    locale: Locale,
    ValidJson(payload): ValidJson<CreateLicensePayload>,
) -> Result<impl IntoResponse, ApiError> {

    let license = app_state
        .license_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(license)))
}

// GET /api/licenses?tenant_id=...&status=...&type=...
#[utoipa::path(
    get,
    path = "/api/licenses",
    tag = "Licenses",
    params(
        ("tenant_id" = String, Query, description = "Identificador do tenant"),
        LicenseFilter
    ),
    responses(
        (status = 200, description = "Licenças do tenant (no máximo 1000)", body = Vec<License>)
    )
)]
pub async fn list_licenses(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    FilterQuery(filter): FilterQuery<LicenseFilter>,
) -> Result<impl IntoResponse, ApiError> {

    let page = app_state
        .license_service
        .list(&tenant.0, &filter)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(page)
}

// GET /api/licenses/{id}?tenant_id=...
#[utoipa::path(
    get,
    path = "/api/licenses/{id}",
    tag = "Licenses",
    params(
        ("id" = String, Path, description = "ID da licença"),
        ("tenant_id" = String, Query, description = "Identificador do tenant")
    ),
    responses(
        (status = 200, description = "Licença encontrada", body = License),
        (status = 404, description = "Licença não encontrada")
    )
)]
pub async fn get_license(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let license = app_state
        .license_service
        .get_by_id(&tenant.0, &id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(license)))
}
