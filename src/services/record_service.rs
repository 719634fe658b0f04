// src/services/record_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{DocumentStore, Filter, RecordRepository},
    models::{ListPage, NewRecord, RecordFilter, Resource, MAX_PAGE_SIZE},
};

// O contrato genérico de cada recurso: criar, listar por tenant e buscar por id.
// Não existe update nem delete individual.
#[derive(Clone)]
pub struct RecordService<T> {
    repo: RecordRepository<T>,
}

impl<T: Resource> RecordService<T> {
    pub fn new(repo: RecordRepository<T>) -> Self {
        Self { repo }
    }

    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(RecordRepository::new(store))
    }

    /// O servidor gera id e created_at; o resto vem do payload já validado.
    pub async fn create<P>(&self, payload: P) -> Result<T, AppError>
    where
        P: NewRecord<Record = T>,
    {
        let record = payload.into_record(Uuid::new_v4(), Utc::now());
        self.repo.insert(&record).await?;

        tracing::info!(
            collection = T::COLLECTION.name(),
            tenant_id = record.tenant_id(),
            id = %record.id(),
            "registro criado"
        );
        Ok(record)
    }

    pub async fn list<F>(&self, tenant_id: &str, filters: &F) -> Result<ListPage<T>, AppError>
    where
        F: RecordFilter,
    {
        let filter = filters.apply(Filter::tenant(tenant_id));
        let page = self.repo.list(&filter, MAX_PAGE_SIZE).await?;

        if page.truncated {
            tracing::warn!(
                collection = T::COLLECTION.name(),
                tenant_id,
                limit = MAX_PAGE_SIZE,
                "listagem truncada no teto"
            );
        }
        Ok(page)
    }

    // id e tenant precisam casar: um id de outro tenant é "não encontrado".
    pub async fn get_by_id(&self, tenant_id: &str, id: &str) -> Result<T, AppError> {
        let filter = Filter::tenant(tenant_id).eq("id", id);
        self.repo
            .find_one(&filter)
            .await?
            .ok_or(AppError::NotFound(T::KIND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MemoryDocumentStore,
        models::{
            project::{CreateProjectPayload, Project, ProjectFilter, ProjectStatus},
            ResourceKind,
        },
    };

    fn payload(tenant: &str, status: ProjectStatus) -> CreateProjectPayload {
        CreateProjectPayload {
            name: "Recuperação de Mata Ciliar".to_string(),
            description: "50 hectares".to_string(),
            status,
            start_date: "2024-03-01".to_string(),
            end_date: None,
            budget: 2_500_000.0,
            manager: "Dr. Maria Silva".to_string(),
            location: "São Paulo, SP".to_string(),
            environmental_impact: "Biodiversidade".to_string(),
            tenant_id: tenant.to_string(),
        }
    }

    fn service() -> RecordService<Project> {
        RecordService::from_store(Arc::new(MemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn created_record_is_retrievable_unchanged() {
        let service = service();
        let created = service.create(payload("t1", ProjectStatus::Planning)).await.unwrap();

        let fetched = service.get_by_id("t1", &created.id.to_string()).await.unwrap();
        assert_eq!(fetched, created);

        let page = service.list("t1", &ProjectFilter::default()).await.unwrap();
        assert_eq!(page.items, vec![created]);
    }

    #[tokio::test]
    async fn other_tenants_and_unknown_ids_are_not_found() {
        let service = service();
        let created = service.create(payload("t1", ProjectStatus::Planning)).await.unwrap();

        let err = service.get_by_id("t2", &created.id.to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ResourceKind::Project)));

        let err = service.get_by_id("t1", "not-a-uuid").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ResourceKind::Project)));

        assert!(service.list("t2", &ProjectFilter::default()).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn filtered_list_is_subset_of_unfiltered() {
        let service = service();
        for status in [
            ProjectStatus::Planning,
            ProjectStatus::InProgress,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ] {
            service.create(payload("t1", status)).await.unwrap();
        }

        let all = service.list("t1", &ProjectFilter::default()).await.unwrap().items;
        let filter = ProjectFilter { status: Some(ProjectStatus::InProgress) };
        let filtered = service.list("t1", &filter).await.unwrap().items;

        assert_eq!(all.len(), 4);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.status == ProjectStatus::InProgress));
        assert!(filtered.iter().all(|p| all.contains(p)));
    }
}
