// src/models/record.rs

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::ValidationError;

use crate::{
    common::extract::empty_as_none,
    db::{Collection, Filter},
};

/// Teto fixo de registros por listagem. Não existe paginação além disso.
pub const MAX_PAGE_SIZE: usize = 1000;

// O tipo do recurso, usado nas mensagens de "não encontrado"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    License,
    Project,
    Inspection,
    WaterMonitoring,
    WasteManagement,
    Commitment,
    User,
}

// ---
// Recurso persistido
// ---
// Todo recurso tem id + tenant_id + created_at gerados/fixados na criação.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;
    const KIND: ResourceKind;

    fn id(&self) -> Uuid;
    fn tenant_id(&self) -> &str;
}

// ---
// Payload de criação
// ---
// Todos os campos menos id/created_at; o servidor completa o resto.
pub trait NewRecord: Send {
    type Record: Resource;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Self::Record;
}

/// `tenant_id` do corpo: vazio ou só espaços é rejeitado, igual ao da query string.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("tenant_id_required"));
    }
    Ok(())
}

// Filtros opcionais de igualdade exata, além do tenant
pub trait RecordFilter {
    fn apply(&self, filter: Filter) -> Filter;
}

// Filtro por situação em texto livre (recursos sem enum de status)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
}

impl RecordFilter for StatusFilter {
    fn apply(&self, filter: Filter) -> Filter {
        filter.eq_opt("status", self.status.clone())
    }
}

/// Resultado de uma listagem. `truncated` indica que havia mais registros que o teto.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub truncated: bool,
}

impl<T> ListPage<T> {
    /// Recebe até `limit + 1` itens e corta o excedente, marcando o truncamento.
    pub fn from_overfetch(mut items: Vec<T>, limit: usize) -> Self {
        let truncated = items.len() > limit;
        items.truncate(limit);
        Self { items, truncated }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overfetch_marks_truncation() {
        let page = ListPage::from_overfetch(vec![1, 2, 3], 2);
        assert_eq!(page.items, vec![1, 2]);
        assert!(page.truncated);

        let page = ListPage::from_overfetch(vec![1, 2], 2);
        assert_eq!(page.items, vec![1, 2]);
        assert!(!page.truncated);

        let page = ListPage::<i32>::from_overfetch(vec![], MAX_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert!(!page.truncated);
    }

    #[test]
    fn status_filter_is_free_text() {
        let filter = StatusFilter { status: Some("Coletado".to_string()) };
        assert_eq!(
            filter.apply(Filter::tenant("t1")).clauses(),
            &[
                ("tenant_id".to_string(), "t1".to_string()),
                ("status".to_string(), "Coletado".to_string()),
            ]
        );
        assert_eq!(StatusFilter::default().apply(Filter::tenant("t1")), Filter::tenant("t1"));
    }

    #[test]
    fn blank_tenants_are_rejected() {
        for blank in ["", "   ", "\t"] {
            let err = not_blank(blank).unwrap_err();
            assert_eq!(err.code, "tenant_id_required");
        }
        assert!(not_blank(" t1").is_ok());
    }
}
