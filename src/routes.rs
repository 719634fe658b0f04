// src/routes.rs

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

// Monta o router completo. Os caminhos são escritos por inteiro (sem `nest`)
// para que "/api" e "/api/" respondam igual.
pub fn app(app_state: AppState, cors: CorsLayer) -> Router {
    let record_routes = Router::new()
        .route(
            "/api/licenses",
            post(handlers::licenses::create_license).get(handlers::licenses::list_licenses),
        )
        .route("/api/licenses/{id}", get(handlers::licenses::get_license))
        .route(
            "/api/projects",
            post(handlers::projects::create_project).get(handlers::projects::list_projects),
        )
        .route("/api/projects/{id}", get(handlers::projects::get_project))
        .route(
            "/api/inspections",
            post(handlers::inspections::create_inspection)
                .get(handlers::inspections::list_inspections),
        )
        .route("/api/inspections/{id}", get(handlers::inspections::get_inspection))
        .route(
            "/api/water-monitoring",
            post(handlers::monitoring::create_water_monitoring)
                .get(handlers::monitoring::list_water_monitoring),
        )
        .route(
            "/api/water-monitoring/{id}",
            get(handlers::monitoring::get_water_monitoring),
        )
        .route(
            "/api/waste",
            post(handlers::monitoring::create_waste).get(handlers::monitoring::list_waste),
        )
        .route("/api/waste/{id}", get(handlers::monitoring::get_waste))
        .route(
            "/api/commitments",
            post(handlers::commitments::create_commitment)
                .get(handlers::commitments::list_commitments),
        )
        .route("/api/commitments/{id}", get(handlers::commitments::get_commitment));

    let system_routes = Router::new()
        .route("/api", get(handlers::root::root))
        .route("/api/", get(handlers::root::root))
        .route("/api/health", get(handlers::root::health))
        .route("/api/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/api/seed-data", post(handlers::seed::seed_data));

    Router::new()
        .merge(system_routes)
        .merge(record_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
