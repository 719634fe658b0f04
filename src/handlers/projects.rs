// src/handlers/projects.rs

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
    models::project::{CreateProjectPayload, Project, ProjectFilter},
};

// POST /api/projects
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectPayload,
    responses(
        (status = 201, description = "Projeto criado", body = Project),
        (status = 422, description = "Dados inválidos")
    )
)]
pub async fn create_project(
    State(app_state): State<AppState>,
    locale: Locale,
    ValidJson(payload): ValidJson<CreateProjectPayload>,
) -> Result<impl IntoResponse, ApiError> {

    let project = app_state
        .project_service
        .create(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(project)))
}

// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    params(
        ("tenant_id" = String, Query, description = "Identificador do tenant"),
        ProjectFilter
    ),
    responses(
        (status = 200, description = "Projetos do tenant", body = Vec<Project>)
    )
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    FilterQuery(filter): FilterQuery<ProjectFilter>,
) -> Result<impl IntoResponse, ApiError> {

    let page = app_state
        .project_service
        .list(&tenant.0, &filter)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(page)
}

// GET /api/projects/{id}
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(
        ("id" = String, Path, description = "ID do projeto"),
        ("tenant_id" = String, Query, description = "Identificador do tenant")
    ),
    responses(
        (status = 200, description = "Projeto encontrado", body = Project),
        (status = 404, description = "Projeto não encontrado")
    )
)]
pub async fn get_project(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let project = app_state
        .project_service
        .get_by_id(&tenant.0, &id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(project)))
}
