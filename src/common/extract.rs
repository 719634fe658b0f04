// src/common/extract.rs

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{
    de::{value::StrDeserializer, DeserializeOwned},
    Deserialize, Deserializer,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    middleware::i18n::Locale,
};

// ---
// JSON validado
// ---
// Igual ao `Json<T>`, mas a rejeição vira o nosso ApiError (JSON, traduzido)
// e o `validator` roda antes do handler.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(req.headers());

        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidBody(rejection.body_text()).to_api_error(&locale))?;

        payload
            .validate()
            .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

        Ok(ValidJson(payload))
    }
}

// ---
// Filtros da query string
// ---
#[derive(Debug)]
pub struct FilterQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for FilterQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(&parts.headers);

        let Query(filter) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::InvalidQuery(rejection.body_text()).to_api_error(&locale))?;

        Ok(FilterQuery(filter))
    }
}

/// `?status=` (vazio ou só espaços) conta como ausente; qualquer outro valor precisa ser válido para `T`.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        // O valor segue como veio: o filtro é de igualdade exata
        Some(value) => T::deserialize(StrDeserializer::<D::Error>::new(value)).map(Some),
    }
}
