// src/handlers/commitments.rs

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
        commitment::{Commitment, CreateCommitmentPayload},
        StatusFilter,
    },
};

// POST /api/commitments
#[utoipa::path(
    post,
    path = "/api/commitments",
    tag = "Commitments",
    request_body = CreateCommitmentPayload,
    responses(
        (status = 201, description = "Compromisso registrado", body = Commitment),
        (status = 422, description = "Dados inválidos")
    )
)]
pub async fn create_commitment(
    State(app_state): State<AppState>,
    locale: Locale,
    ValidJson(payload): ValidJson<CreateCommitmentPayload>,
) -> Result<impl IntoResponse, ApiError> {

    let commitment = app_state
        .commitment_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(commitment)))
}

// GET /api/commitments
#[utoipa::path(
    get,
    path = "/api/commitments",
    tag = "Commitments",
    params(
        ("tenant_id" = String, Query, description = "Identificador do tenant"),
        StatusFilter
    ),
    responses(
        (status = 200, description = "Compromissos do tenant", body = Vec<Commitment>)
    )
)]
pub async fn list_commitments(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    FilterQuery(filter): FilterQuery<StatusFilter>,
) -> Result<impl IntoResponse, ApiError> {

    let page = app_state
        .commitment_service
        .list(&tenant.0, &filter)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(page)
}

// GET /api/commitments/{id}
#[utoipa::path(
    get,
    path = "/api/commitments/{id}",
    tag = "Commitments",
    params(
        ("id" = String, Path, description = "ID do compromisso"),
        ("tenant_id" = String, Query, description = "Identificador do tenant")
    ),
    responses(
        (status = 200, description = "Compromisso encontrado", body = Commitment),
        (status = 404, description = "Compromisso não encontrado")
    )
)]
pub async fn get_commitment(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let commitment = app_state
        .commitment_service
        .get_by_id(&tenant.0, &id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(commitment)))
}
