// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{i18n::Locale, tenancy::TenantContext},
    models::dashboard::DashboardStats,
};

// GET /api/dashboard/stats?tenant_id=...
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    params(
        ("tenant_id" = String, Query, description = "Identificador do tenant")
    ),
    responses(
        (status = 200, description = "Totais do tenant e indicadores do painel", body = DashboardStats),
        (status = 422, description = "tenant_id ausente")
    )
)]
pub async fn get_stats(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ApiError> {

    let stats = app_state
        .dashboard_service
        .get_stats(&tenant.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(stats)))
}
