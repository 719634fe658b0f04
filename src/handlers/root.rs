// src/handlers/root.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::{self, Locale, Message},
    models::dashboard::MessageResponse,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: &'static str,
}

// GET /api/
#[utoipa::path(
    get,
    path = "/api/",
    tag = "System",
    responses(
        (status = 200, description = "Identificação da API", body = MessageResponse)
    )
)]
pub async fn root(locale: Locale) -> impl IntoResponse {
    Json(MessageResponse {
        message: i18n::translate(Message::Welcome, &locale).to_string(),
    })
}

// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Store acessível", body = HealthStatus),
        (status = 500, description = "Store indisponível")
    )
)]
pub async fn health(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    app_state
        .store
        .ping()
        .await
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(HealthStatus { status: "ok" })))
}
