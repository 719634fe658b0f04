// src/middleware/tenancy.rs

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::{
    common::error::{ApiError, AppError},
    middleware::i18n::Locale,
};

// O tenant vem da query string (?tenant_id=...). Não há autenticação:
// qualquer string não vazia é aceita como tenant.
#[derive(Debug, Deserialize)]
struct TenantQuery {
    tenant_id: Option<String>,
}

// O nosso extrator. Ele armazena o tenant que o chamador quer acessar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext(pub String);

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(&parts.headers);

        let Query(query) = Query::<TenantQuery>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::InvalidQuery(rejection.body_text()).to_api_error(&locale))?;

        match query.tenant_id {
            Some(tenant_id) if !tenant_id.trim().is_empty() => Ok(TenantContext(tenant_id)),
            _ => Err(AppError::MissingTenant.to_api_error(&locale)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn extract(uri: &str) -> Result<TenantContext, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        TenantContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn reads_tenant_from_query() {
        let tenant = extract("/api/licenses?tenant_id=t1&status=Ativa").await.unwrap();
        assert_eq!(tenant, TenantContext("t1".to_string()));
    }

    #[tokio::test]
    async fn missing_or_blank_tenant_is_rejected() {
        for uri in ["/api/licenses", "/api/licenses?tenant_id=", "/api/licenses?tenant_id=%20"] {
            let err = extract(uri).await.unwrap_err();
            assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(err.code, "validation_error");
        }
    }
}
