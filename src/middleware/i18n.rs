// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};

use crate::models::ResourceKind;

// Idiomas com mensagens traduzidas. Qualquer outro cai no padrão (pt).
const DEFAULT_LANG: &str = "pt";
const SUPPORTED_LANGS: [&str; 2] = ["pt", "en"];

// Nosso extrator de idioma
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANG.to_string())
    }
}

impl Locale {
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .and_then(|header_str| {
                // "pt-BR" -> "pt"; o primeiro idioma suportado (por qualidade) vence
                accept_language::parse(header_str).into_iter().find_map(|tag| {
                    let lang = tag.split('-').next().unwrap_or(tag.as_str()).to_lowercase();
                    SUPPORTED_LANGS.contains(&lang.as_str()).then_some(lang)
                })
            })
            .map(Locale)
            .unwrap_or_default()
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_header(
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok()),
        )
    }

    fn is_en(&self) -> bool {
        self.0 == "en"
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_headers(&parts.headers))
    }
}

// ---
// Catálogo de mensagens
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Welcome,
    ValidationFailed,
    InvalidBody,
    InvalidQuery,
    MissingTenant,
    Unexpected,
    SeedCompleted,
}

pub fn translate(message: Message, locale: &Locale) -> &'static str {
    let (pt, en) = match message {
        Message::Welcome => (
            "GaiaSystem API v2.2 - Gestão Ambiental Digital",
            "GaiaSystem API v2.2 - Digital Environmental Management",
        ),
        Message::ValidationFailed => (
            "Um ou mais campos são inválidos.",
            "One or more fields are invalid.",
        ),
        Message::InvalidBody => (
            "O corpo da requisição é inválido.",
            "The request body is invalid.",
        ),
        Message::InvalidQuery => (
            "Os parâmetros de consulta são inválidos.",
            "The query parameters are invalid.",
        ),
        Message::MissingTenant => (
            "O parâmetro tenant_id é obrigatório.",
            "The tenant_id parameter is required.",
        ),
        Message::Unexpected => ("Ocorreu um erro inesperado.", "An unexpected error occurred."),
        Message::SeedCompleted => (
            "Dados de exemplo criados com sucesso",
            "Sample data created successfully",
        ),
    };
    if locale.is_en() { en } else { pt }
}

pub fn not_found(kind: ResourceKind, locale: &Locale) -> &'static str {
    let (pt, en) = match kind {
        ResourceKind::License => ("Licença não encontrada", "License not found"),
        ResourceKind::Project => ("Projeto não encontrado", "Project not found"),
        ResourceKind::Inspection => ("Vistoria não encontrada", "Inspection not found"),
        ResourceKind::WaterMonitoring => (
            "Monitoramento de água não encontrado",
            "Water monitoring record not found",
        ),
        ResourceKind::WasteManagement => (
            "Registro de resíduo não encontrado",
            "Waste record not found",
        ),
        ResourceKind::Commitment => ("Compromisso não encontrado", "Commitment not found"),
        ResourceKind::User => ("Usuário não encontrado", "User not found"),
    };
    if locale.is_en() { en } else { pt }
}

/// Traduz os códigos usados nas mensagens do `validator`. Códigos desconhecidos voltam como estão.
pub fn translate_code(code: &str, locale: &Locale) -> String {
    let translated = match (code, locale.is_en()) {
        ("tenant_id_required", false) => "O tenant_id é obrigatório.",
        ("tenant_id_required", true) => "tenant_id is required.",
        _ => code,
    };
    translated.to_string()
}
