pub mod commitments;
pub mod dashboard;
pub mod inspections;
pub mod licenses;
pub mod monitoring;
pub mod projects;
pub mod root;
pub mod seed;
