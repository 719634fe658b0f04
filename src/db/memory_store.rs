// src/db/memory_store.rs

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::store::{required_str, Collection, DocumentStore, Filter, StoreError};

// Store em memória (DATABASE_URL=memory://). Usado em desenvolvimento e nos testes.
// A ordem natural é a ordem de inserção.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_unique(docs: &[Value], doc: &Value) -> Result<(), StoreError> {
    let id = required_str(doc, "id")?;
    required_str(doc, "tenant_id")?;
    if docs.iter().any(|d| d.get("id").and_then(Value::as_str) == Some(id)) {
        return Err(StoreError::DuplicateKey(id.to_string()));
    }
    Ok(())
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(&self, collection: Collection, doc: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        check_unique(docs, &doc)?;
        docs.push(doc);
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        new_docs: Vec<Value>,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();

        // Valida o lote inteiro antes de gravar qualquer coisa
        for (i, doc) in new_docs.iter().enumerate() {
            check_unique(docs, doc)?;
            check_unique(&new_docs[..i], doc)?;
        }

        let inserted = new_docs.len() as u64;
        docs.extend(new_docs);
        Ok(inserted)
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)).cloned()))
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).count() as u64)
            .unwrap_or(0))
    }

    async fn delete_many(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|doc| !filter.matches(doc));
        Ok((before - docs.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
