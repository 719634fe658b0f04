// src/db/dashboard_repo.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{record_repo::RecordRepository, store::DocumentStore, Filter},
    models::{
        inspection::Inspection,
        license::{License, LicenseStatus},
        project::Project,
    },
};

// Contagens brutas do painel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardCounts {
    pub licenses_total: u64,
    pub projects_total: u64,
    pub inspections_total: u64,
    pub licenses_active: u64,
}

#[derive(Clone)]
pub struct DashboardRepository {
    licenses: RecordRepository<License>,
    projects: RecordRepository<Project>,
    inspections: RecordRepository<Inspection>,
}

impl DashboardRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            licenses: RecordRepository::new(Arc::clone(&store)),
            projects: RecordRepository::new(Arc::clone(&store)),
            inspections: RecordRepository::new(store),
        }
    }

    // Quatro contagens independentes, disparadas em paralelo. Não é um snapshot:
    // escritas concorrentes podem aparecer em uma contagem e não em outra.
    pub async fn get_counts(&self, tenant_id: &str) -> Result<DashboardCounts, AppError> {
        let by_tenant = Filter::tenant(tenant_id);
        let active = Filter::tenant(tenant_id).eq("status", LicenseStatus::Active.as_str());

        let (licenses_total, projects_total, inspections_total, licenses_active) = tokio::try_join!(
            self.licenses.count(&by_tenant),
            self.projects.count(&by_tenant),
            self.inspections.count(&by_tenant),
            self.licenses.count(&active),
        )?;

        Ok(DashboardCounts {
            licenses_total,
            projects_total,
            inspections_total,
            licenses_active,
        })
    }
}
