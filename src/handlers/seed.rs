// src/handlers/seed.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::{
        error::ApiError,
        extract::{empty_as_none, FilterQuery},
    },
    config::AppState,
    middleware::i18n::{self, Locale, Message},
    models::dashboard::SeedSummary,
    services::seed_service::DEFAULT_SEED_TENANT,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeedQuery {
    /// Tenant a ser recriado (padrão: "demo-tenant")
    #[serde(default, deserialize_with = "empty_as_none")]
    pub tenant_id: Option<String>,
}

// POST /api/seed-data?tenant_id=...
// Destrutivo: apaga licenças, projetos e vistorias do tenant antes de gravar os exemplos.
#[utoipa::path(
    post,
    path = "/api/seed-data",
    tag = "System",
    params(SeedQuery),
    responses(
        (status = 200, description = "Dados de exemplo recriados", body = SeedSummary)
    )
)]
pub async fn seed_data(
    State(app_state): State<AppState>,
    locale: Locale,
    FilterQuery(query): FilterQuery<SeedQuery>,
) -> Result<impl IntoResponse, ApiError> {

    let tenant_id = query
        .tenant_id
        .unwrap_or_else(|| DEFAULT_SEED_TENANT.to_string());

    let counts = app_state
        .seed_service
        .reset(&tenant_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((
        StatusCode::OK,
        Json(SeedSummary {
            message: i18n::translate(Message::SeedCompleted, &locale).to_string(),
            tenant_id,
            licenses: counts.licenses,
            projects: counts.projects,
            inspections: counts.inspections,
        }),
    ))
}
