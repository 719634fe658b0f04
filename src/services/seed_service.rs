// src/services/seed_service.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{DocumentStore, Filter, RecordRepository},
    models::{
        inspection::{ChecklistItem, Inspection, InspectionStatus},
        license::{License, LicenseStatus, LicenseType},
        project::{Project, ProjectStatus},
    },
};

pub const DEFAULT_SEED_TENANT: &str = "demo-tenant";

// Quantos registros de exemplo foram gravados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub licenses: u64,
    pub projects: u64,
    pub inspections: u64,
}

// ---
// Dados de exemplo (desenvolvimento/demonstração)
// ---
// Apaga licenças, projetos e vistorias do tenant e grava o conjunto fixo de novo.
// É destrutivo e não tem proteção nem transação: duas chamadas simultâneas
// no mesmo tenant podem se intercalar.
#[derive(Clone)]
pub struct SeedService {
    licenses: RecordRepository<License>,
    projects: RecordRepository<Project>,
    inspections: RecordRepository<Inspection>,
}

impl SeedService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            licenses: RecordRepository::new(Arc::clone(&store)),
            projects: RecordRepository::new(Arc::clone(&store)),
            inspections: RecordRepository::new(store),
        }
    }

    pub async fn reset(&self, tenant_id: &str) -> Result<SeedCounts, AppError> {
        let filter = Filter::tenant(tenant_id);

        // 1. Limpa os dados existentes do tenant
        let removed_licenses = self.licenses.delete_many(&filter).await?;
        let removed_projects = self.projects.delete_many(&filter).await?;
        let removed_inspections = self.inspections.delete_many(&filter).await?;

        // 2. Grava o conjunto fixo
        let now = Utc::now();
        let counts = SeedCounts {
            licenses: self.licenses.insert_many(&sample_licenses(tenant_id, now)).await?,
            projects: self.projects.insert_many(&sample_projects(tenant_id, now)).await?,
            inspections: self
                .inspections
                .insert_many(&sample_inspections(tenant_id, now))
                .await?,
        };

        tracing::info!(
            tenant_id,
            removed_licenses,
            removed_projects,
            removed_inspections,
            "🌱 Dados de exemplo recriados"
        );
        Ok(counts)
    }
}

fn sample_licenses(tenant_id: &str, now: DateTime<Utc>) -> Vec<License> {
    vec![
        License {
            id: Uuid::new_v4(),
            number: "LP001/2024-SP".to_string(),
            license_type: LicenseType::Lp,
            title: "Licença Prévia - Complexo Industrial".to_string(),
            company: "Indústria Brasileira S.A.".to_string(),
            cnpj: "12.345.678/0001-90".to_string(),
            status: LicenseStatus::Active,
            issue_date: "2024-01-15".to_string(),
            expiry_date: "2025-01-15".to_string(),
            issuing_body: "CETESB".to_string(),
            activity_type: "Indústria Química".to_string(),
            description: Some(
                "Licenciamento para instalação de complexo industrial químico".to_string(),
            ),
            tenant_id: tenant_id.to_string(),
            created_at: now,
        },
        License {
            id: Uuid::new_v4(),
            number: "LO089/2023-RJ".to_string(),
            license_type: LicenseType::Lo,
            title: "Licença de Operação - Refinaria".to_string(),
            company: "Petróleo do Brasil Ltda".to_string(),
            cnpj: "98.765.432/0001-10".to_string(),
            status: LicenseStatus::Active,
            issue_date: "2023-06-20".to_string(),
            expiry_date: "2028-06-20".to_string(),
            issuing_body: "INEA".to_string(),
            activity_type: "Refino de Petróleo".to_string(),
            description: Some("Operação de refinaria de petróleo".to_string()),
            tenant_id: tenant_id.to_string(),
            created_at: now,
        },
    ]
}

fn sample_projects(tenant_id: &str, now: DateTime<Utc>) -> Vec<Project> {
    vec![Project {
        id: Uuid::new_v4(),
        name: "Recuperação de Mata Ciliar - Rio Tietê".to_string(),
        description: "Projeto de recuperação de 50 hectares de mata ciliar".to_string(),
        status: ProjectStatus::InProgress,
        start_date: "2024-03-01".to_string(),
        end_date: Some("2024-12-31".to_string()),
        budget: 2_500_000.00,
        manager: "Dr. Maria Silva".to_string(),
        location: "São Paulo, SP".to_string(),
        environmental_impact: "Recuperação de biodiversidade aquática".to_string(),
        tenant_id: tenant_id.to_string(),
        created_at: now,
    }]
}

fn sample_inspections(tenant_id: &str, now: DateTime<Utc>) -> Vec<Inspection> {
    let checklist = [
        ("Funcionamento da ETE", "Conforme"),
        ("Qualidade do efluente", "Conforme"),
        ("Documentação atualizada", "Não Conforme"),
    ];

    vec![Inspection {
        id: Uuid::new_v4(),
        title: "Vistoria Trimestral - Tratamento de Efluentes".to_string(),
        location: "Complexo Industrial - São Bernardo do Campo, SP".to_string(),
        scheduled_date: "2024-07-20".to_string(),
        inspector: "Eng. João Santos".to_string(),
        status: InspectionStatus::Completed,
        conformity_percentage: 87.5,
        checklist_items: checklist
            .iter()
            .map(|(item, status)| ChecklistItem {
                item: item.to_string(),
                status: status.to_string(),
                evidence: String::new(),
            })
            .collect(),
        observations: Some("Necessário atualizar certidões de destinação de resíduos".to_string()),
        tenant_id: tenant_id.to_string(),
        created_at: now,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::MemoryDocumentStore, models::MAX_PAGE_SIZE};

    #[tokio::test]
    async fn reset_twice_leaves_exactly_the_sample_set() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let seed = SeedService::new(Arc::clone(&store));

        let first = seed.reset("t1").await.unwrap();
        let second = seed.reset("t1").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            second,
            SeedCounts { licenses: 2, projects: 1, inspections: 1 }
        );

        let licenses = RecordRepository::<License>::new(Arc::clone(&store));
        let page = licenses.list(&Filter::tenant("t1"), MAX_PAGE_SIZE).await.unwrap();
        let numbers: Vec<_> = page.items.iter().map(|l| l.number.as_str()).collect();
        assert_eq!(numbers, ["LP001/2024-SP", "LO089/2023-RJ"]);
    }

    #[tokio::test]
    async fn reset_leaves_other_tenants_untouched() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let seed = SeedService::new(Arc::clone(&store));
        seed.reset("t2").await.unwrap();
        seed.reset("t1").await.unwrap();
        seed.reset("t1").await.unwrap();

        let projects = RecordRepository::<Project>::new(store);
        assert_eq!(projects.count(&Filter::tenant("t2")).await.unwrap(), 1);
        assert_eq!(projects.count(&Filter::tenant("t1")).await.unwrap(), 1);
    }
}
