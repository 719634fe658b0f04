pub mod store;
pub use store::{Collection, DocumentStore, Filter, StoreError};
pub mod memory_store;
pub use memory_store::MemoryDocumentStore;
pub mod pg_store;
pub use pg_store::PgDocumentStore;
pub mod record_repo;
pub use record_repo::RecordRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
