pub mod record_service;
pub use record_service::RecordService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod seed_service;
pub use seed_service::SeedService;
