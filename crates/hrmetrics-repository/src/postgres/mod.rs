//! PostgreSQL repository implementations.

mod report_repository;

pub use report_repository::PgReportRepository;
