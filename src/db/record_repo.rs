// src/db/record_repo.rs

use std::{marker::PhantomData, sync::Arc};

use serde_json::Value;

use crate::{
    common::error::AppError,
    db::store::{DocumentStore, Filter, StoreError},
    models::{ListPage, Resource},
};

// O repositório genérico: um por tipo de recurso, todos sobre o mesmo store.
// Converte entre o modelo tipado e o documento JSON guardado na coleção.
pub struct RecordRepository<T> {
    store: Arc<dyn DocumentStore>,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _resource: PhantomData,
        }
    }
}

fn decode<T: Resource>(doc: Value) -> Result<T, AppError> {
    serde_json::from_value(doc).map_err(|e| StoreError::Serialization(e).into())
}

fn encode<T: Resource>(record: &T) -> Result<Value, AppError> {
    serde_json::to_value(record).map_err(|e| StoreError::Serialization(e).into())
}

impl<T: Resource> RecordRepository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    pub async fn insert(&self, record: &T) -> Result<(), AppError> {
        let doc = encode(record)?;
        self.store.insert_one(T::COLLECTION, doc).await?;
        Ok(())
    }

    pub async fn insert_many(&self, records: &[T]) -> Result<u64, AppError> {
        let docs = records.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
        Ok(self.store.insert_many(T::COLLECTION, docs).await?)
    }

    /// Busca até `limit` registros; pede um a mais ao store para saber se houve corte.
    pub async fn list(&self, filter: &Filter, limit: usize) -> Result<ListPage<T>, AppError> {
        let docs = self
            .store
            .find(T::COLLECTION, filter, limit.saturating_add(1))
            .await?;
        let items = docs.into_iter().map(decode).collect::<Result<Vec<T>, _>>()?;
        Ok(ListPage::from_overfetch(items, limit))
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<T>, AppError> {
        self.store
            .find_one(T::COLLECTION, filter)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn count(&self, filter: &Filter) -> Result<u64, AppError> {
        Ok(self.store.count(T::COLLECTION, filter).await?)
    }

    pub async fn delete_many(&self, filter: &Filter) -> Result<u64, AppError> {
        Ok(self.store.delete_many(T::COLLECTION, filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{Collection, MemoryDocumentStore},
        models::user::User,
    };
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn user(tenant: &str, name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{name}@gaia.test"),
            role: "analista".to_string(),
            tenant_id: tenant.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn round_trips_typed_records() {
        let repo = RecordRepository::<User>::new(Arc::new(MemoryDocumentStore::new()));
        let ana = user("t1", "ana");
        repo.insert(&ana).await.unwrap();

        let found = repo
            .find_one(&Filter::tenant("t1").eq("id", ana.id.to_string()))
            .await
            .unwrap();
        assert_eq!(found, Some(ana.clone()));

        let cross_tenant = repo
            .find_one(&Filter::tenant("t2").eq("id", ana.id.to_string()))
            .await
            .unwrap();
        assert_eq!(cross_tenant, None);
    }

    #[tokio::test]
    async fn list_overfetches_to_detect_truncation() {
        let repo = RecordRepository::<User>::new(Arc::new(MemoryDocumentStore::new()));
        let users: Vec<_> = (0..4).map(|i| user("t1", &format!("u{i}"))).collect();
        assert_eq!(repo.insert_many(&users).await.unwrap(), 4);

        let page = repo.list(&Filter::tenant("t1"), 3).await.unwrap();
        assert_eq!(page.items.len(), 3);
        assert!(page.truncated);

        let page = repo.list(&Filter::tenant("t1"), 4).await.unwrap();
        assert_eq!(page.items, users);
        assert!(!page.truncated);
    }

    #[tokio::test]
    async fn undecodable_documents_surface_as_store_errors() {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .insert_one(Collection::Users, json!({ "id": "x", "tenant_id": "t1" }))
            .await
            .unwrap();

        let repo = RecordRepository::<User>::new(store);
        let err = repo.list(&Filter::tenant("t1"), 10).await.unwrap_err();
        assert!(matches!(err, AppError::StoreError(StoreError::Serialization(_))));
    }
}
