// src/db/store.rs

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

// ---
// Coleções
// ---
// Uma coleção por tipo de recurso. O nome é também o nome da tabela no Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Licenses,
    Projects,
    Inspections,
    WaterMonitoring,
    WasteManagement,
    Commitments,
    Users,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Licenses,
        Collection::Projects,
        Collection::Inspections,
        Collection::WaterMonitoring,
        Collection::WasteManagement,
        Collection::Commitments,
        Collection::Users,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Licenses => "licenses",
            Collection::Projects => "projects",
            Collection::Inspections => "inspections",
            Collection::WaterMonitoring => "water_monitoring",
            Collection::WasteManagement => "waste_management",
            Collection::Commitments => "commitments",
            Collection::Users => "users",
        }
    }
}

// ---
// Filtro de igualdade exata
// ---
/// Conjunto de cláusulas `campo == valor` (todas precisam casar).
/// Todo filtro nasce com o `tenant_id`, então não existe consulta sem tenant.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, String)>,
}

impl Filter {
    pub fn tenant(tenant_id: &str) -> Self {
        Self {
            clauses: vec![("tenant_id".to_string(), tenant_id.to_string())],
        }
    }

    pub fn eq(mut self, field: &str, value: impl Into<String>) -> Self {
        self.clauses.push((field.to_string(), value.into()));
        self
    }

    pub fn eq_opt<V: Into<String>>(self, field: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    /// O tenant do filtro (sempre a primeira cláusula).
    pub fn tenant_id(&self) -> &str {
        self.clauses
            .first()
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    pub fn clauses(&self) -> &[(String, String)] {
        &self.clauses
    }

    pub fn matches(&self, doc: &Value) -> bool {
        self.clauses.iter().all(|(field, expected)| {
            doc.get(field)
                .and_then(Value::as_str)
                .is_some_and(|actual| actual == expected)
        })
    }

    /// Documento de "containment" usado pelo Postgres (`doc @> $1`).
    pub fn to_document(&self) -> Value {
        let mut obj = Map::new();
        for (field, value) in &self.clauses {
            obj.insert(field.clone(), Value::String(value.clone()));
        }
        Value::Object(obj)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),

    #[error("erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("documento sem o campo obrigatório '{0}'")]
    MalformedDocument(&'static str),

    #[error("chave duplicada: {0}")]
    DuplicateKey(String),
}

// ---
// O contrato do armazenamento
// ---
// Cada método é uma única operação no store; nada de transações entre chamadas.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: Collection, doc: Value) -> Result<(), StoreError>;

    async fn insert_many(&self, collection: Collection, docs: Vec<Value>)
        -> Result<u64, StoreError>;

    /// Retorna no máximo `limit` documentos, na ordem natural do store.
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Value>, StoreError>;

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError>;

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, StoreError>;

    async fn delete_many(&self, collection: Collection, filter: &Filter)
        -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Extrai um campo string obrigatório do documento (`id`, `tenant_id`).
pub(crate) fn required_str<'a>(doc: &'a Value, field: &'static str) -> Result<&'a str, StoreError> {
    doc.get(field)
        .and_then(Value::as_str)
        .ok_or(StoreError::MalformedDocument(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_requires_every_clause() {
        let doc = json!({ "tenant_id": "t1", "status": "Ativa", "type": "LP" });

        assert!(Filter::tenant("t1").matches(&doc));
        assert!(Filter::tenant("t1").eq("status", "Ativa").eq("type", "LP").matches(&doc));
        assert!(!Filter::tenant("t2").matches(&doc));
        assert!(!Filter::tenant("t1").eq("status", "Pendente").matches(&doc));
        assert!(!Filter::tenant("t1").eq("missing", "x").matches(&doc));
    }

    #[test]
    fn tenant_stays_first_whatever_is_added() {
        let filter = Filter::tenant(" t1").eq("status", "Ativa").eq("id", "x");
        assert_eq!(filter.tenant_id(), " t1");
    }

    #[test]
    fn eq_opt_skips_absent_values() {
        let filter = Filter::tenant("t1").eq_opt::<String>("status", None);
        assert_eq!(filter.clauses().len(), 1);

        let filter = Filter::tenant("t1").eq_opt("status", Some("Ativa"));
        assert_eq!(
            filter.to_document(),
            json!({ "tenant_id": "t1", "status": "Ativa" })
        );
    }

    #[test]
    fn collection_names_are_unique() {
        let mut names: Vec<_> = Collection::ALL.iter().map(Collection::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Collection::ALL.len());
    }
}
