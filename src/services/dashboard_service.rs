// src/services/dashboard_service.rs

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{DashboardStats, PLACEHOLDER_COMPLIANCE_SCORE, PLACEHOLDER_ESG_SCORE},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn get_stats(&self, tenant_id: &str) -> Result<DashboardStats, AppError> {
        let counts = self.repo.get_counts(tenant_id).await?;

        Ok(DashboardStats {
            licenses_total: counts.licenses_total,
            projects_total: counts.projects_total,
            inspections_total: counts.inspections_total,
            licenses_active: counts.licenses_active,
            // TODO: calcular a partir das vistorias e condicionantes quando houver regra de negócio
            compliance_score: PLACEHOLDER_COMPLIANCE_SCORE,
            esg_score: PLACEHOLDER_ESG_SCORE,
        })
    }
}
