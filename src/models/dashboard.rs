// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Indicadores ainda não implementados: valores fixos, não vêm dos dados.
pub const PLACEHOLDER_COMPLIANCE_SCORE: f64 = 85.7;
pub const PLACEHOLDER_ESG_SCORE: f64 = 92.3;

// Os cards do topo do painel
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub licenses_total: u64,
    pub projects_total: u64,
    pub inspections_total: u64,
    pub licenses_active: u64,

    /// Placeholder fixo (85.7), não calculado.
    pub compliance_score: f64,
    /// Placeholder fixo (92.3), não calculado.
    pub esg_score: f64,
}

// Resposta do POST /api/seed-data
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeedSummary {
    pub message: String,
    pub tenant_id: String,
    pub licenses: u64,
    pub projects: u64,
    pub inspections: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
