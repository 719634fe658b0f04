pub mod record;
pub use record::{ListPage, NewRecord, RecordFilter, Resource, ResourceKind, StatusFilter, MAX_PAGE_SIZE};
pub mod license;
pub mod project;
pub mod inspection;
pub mod monitoring;
pub mod commitment;
pub mod user;
pub mod dashboard;
