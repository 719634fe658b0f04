use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    db::StoreError,
    middleware::i18n::{self, Locale, Message},
    models::ResourceKind,
};

// Nosso tipo de erro, com `thiserror`. Conjunto fechado: validação, não encontrado,
// falha do store e o genérico.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo JSON malformado, campo ausente ou valor fora do enum
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),

    #[error("Parâmetros de consulta inválidos: {0}")]
    InvalidQuery(String),

    #[error("Parâmetro tenant_id ausente")]
    MissingTenant,

    #[error("Registro não encontrado: {0:?}")]
    NotFound(ResourceKind),

    #[error("Erro de armazenamento: {0}")]
    StoreError(#[from] StoreError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

// O erro já traduzido, pronto para virar resposta HTTP
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl AppError {
    /// O único lugar que decide status HTTP e mensagem para cada tipo de erro.
    pub fn to_api_error(self, locale: &Locale) -> ApiError {
        match self {
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            let code = e.message.as_deref().unwrap_or(e.code.as_ref());
                            i18n::translate_code(code, locale)
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    code: "validation_error",
                    message: i18n::translate(Message::ValidationFailed, locale).to_string(),
                    details: Some(json!(details)),
                }
            }
            AppError::InvalidBody(reason) => ApiError {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                code: "validation_error",
                message: i18n::translate(Message::InvalidBody, locale).to_string(),
                details: Some(json!({ "reason": reason })),
            },
            AppError::InvalidQuery(reason) => ApiError {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                code: "validation_error",
                message: i18n::translate(Message::InvalidQuery, locale).to_string(),
                details: Some(json!({ "reason": reason })),
            },
            AppError::MissingTenant => ApiError {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                code: "validation_error",
                message: i18n::translate(Message::MissingTenant, locale).to_string(),
                details: None,
            },
            AppError::NotFound(kind) => ApiError {
                status: StatusCode::NOT_FOUND,
                code: "not_found",
                message: i18n::not_found(kind, locale).to_string(),
                details: None,
            },

            // Todos os outros erros (StoreError, InternalServerError) viram 500.
            // A causa real só vai para o log.
            e @ (AppError::StoreError(_) | AppError::InternalServerError(_)) => {
                tracing::error!(error = %e, "Erro Interno do Servidor");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "internal_error",
                    message: i18n::translate(Message::Unexpected, locale).to_string(),
                    details: None,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "detail": self.message,
            "code": self.code,
        });
        if let Some(details) = self.details {
            body["errors"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}

// Para quando não temos o Locale em mãos (usa o idioma padrão)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default()).into_response()
    }
}
