// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GaiaSystem API",
        version = "2.2.0",
        description = "Gestão Ambiental Digital: licenças, projetos, vistorias e monitoramento"
    ),
    paths(
        // --- System ---
        handlers::root::root,
        handlers::root::health,
        handlers::seed::seed_data,

        // --- Dashboard ---
        handlers::dashboard::get_stats,

        // --- Licenses ---
        handlers::licenses::create_license,
        handlers::licenses::list_licenses,
        handlers::licenses::get_license,

        // --- Projects ---
        handlers::projects::create_project,
        handlers::projects::list_projects,
        handlers::projects::get_project,

        // --- Inspections ---
        handlers::inspections::create_inspection,
        handlers::inspections::list_inspections,
        handlers::inspections::get_inspection,

        // --- Monitoring ---
        handlers::monitoring::create_water_monitoring,
        handlers::monitoring::list_water_monitoring,
        handlers::monitoring::get_water_monitoring,
        handlers::monitoring::create_waste,
        handlers::monitoring::list_waste,
        handlers::monitoring::get_waste,

        // --- Commitments ---
        handlers::commitments::create_commitment,
        handlers::commitments::list_commitments,
        handlers::commitments::get_commitment,
    ),
    components(
        schemas(
            // --- Licenses ---
            models::license::LicenseType,
            models::license::LicenseStatus,
            models::license::License,
            models::license::CreateLicensePayload,

            // --- Projects ---
            models::project::ProjectStatus,
            models::project::Project,
            models::project::CreateProjectPayload,

            // --- Inspections ---
            models::inspection::InspectionStatus,
            models::inspection::ChecklistItem,
            models::inspection::Inspection,
            models::inspection::CreateInspectionPayload,

            // --- Monitoring ---
            models::monitoring::WaterMonitoring,
            models::monitoring::CreateWaterMonitoringPayload,
            models::monitoring::WasteManagement,
            models::monitoring::CreateWasteManagementPayload,

            // --- Commitments ---
            models::commitment::Commitment,
            models::commitment::CreateCommitmentPayload,

            // --- Dashboard / System ---
            models::dashboard::DashboardStats,
            models::dashboard::SeedSummary,
            models::dashboard::MessageResponse,
            handlers::root::HealthStatus,
        )
    ),
    tags(
        (name = "System", description = "Identificação, saúde e dados de exemplo"),
        (name = "Dashboard", description = "Indicadores do painel"),
        (name = "Licenses", description = "Licenças ambientais"),
        (name = "Projects", description = "Projetos ambientais"),
        (name = "Inspections", description = "Vistorias e checklists"),
        (name = "Monitoring", description = "Monitoramento de água e gestão de resíduos"),
        (name = "Commitments", description = "Compromissos e condicionantes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/",
            "/api/health",
            "/api/seed-data",
            "/api/dashboard/stats",
            "/api/licenses",
            "/api/licenses/{id}",
            "/api/projects/{id}",
            "/api/inspections/{id}",
            "/api/water-monitoring/{id}",
            "/api/waste/{id}",
            "/api/commitments/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "rota sem documentação: {path}");
        }
    }
}
