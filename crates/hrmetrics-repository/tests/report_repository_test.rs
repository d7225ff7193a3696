//! Integration tests for PgReportRepository.
//!
//! These tests run against a real PostgreSQL database using testcontainers
//! and are ignored by default; run them with `cargo test -- --ignored` on a
//! machine with Docker available.

mod common;

use common::TestDatabase;
use hrmetrics_repository::{PgReportRepository, ReportRepository};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_hiring_metrics_orders_by_conversion_rate() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let metrics = repo.hiring_metrics().await.expect("Query failed");
    assert_eq!(metrics.len(), 2);

    // Data Analyst converts at 100%, Video Editor at 33.33%.
    assert_eq!(metrics[0].role, "Data Analyst");
    assert_eq!(metrics[0].total_applicants, 1);
    assert_eq!(metrics[0].hired_count, 1);
    assert!((metrics[0].conversion_rate - 100.0).abs() < f64::EPSILON);

    assert_eq!(metrics[1].role, "Video Editor");
    assert_eq!(metrics[1].total_applicants, 3);
    assert_eq!(metrics[1].hired_count, 1);
    assert!((metrics[1].conversion_rate - 33.33).abs() < 0.001);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_applicant_status_summary_percentages() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let summary = repo.applicant_status_summary().await.expect("Query failed");
    assert_eq!(summary.len(), 3);

    assert_eq!(summary[0].status, "Hired");
    assert_eq!(summary[0].count, 2);
    assert!((summary[0].percentage - 50.0).abs() < 0.001);

    let total: i64 = summary.iter().map(|s| s.count).sum();
    assert_eq!(total, 4);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_master_employee_view_joins_applications() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let employees = repo.master_employee_view().await.expect("Query failed");
    assert_eq!(employees.len(), 3);

    let ada = &employees[0];
    assert_eq!(ada.id, 1);
    assert_eq!(ada.name, "Ada Lovelace");
    assert_eq!(ada.employment_type.as_deref(), Some("Full-Time"));
    assert_eq!(ada.applied_role.as_deref(), Some("Video Editor"));
    assert_eq!(ada.employment_status.as_deref(), Some("Active"));
    assert_eq!(ada.days_to_hire, Some(27.0));

    // Direct hire: no matching application, terminated last June.
    let katherine = &employees[2];
    assert_eq!(katherine.id, 3);
    assert!(katherine.applied_role.is_none());
    assert_eq!(katherine.employment_status.as_deref(), Some("Terminated"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_employment_types_breakdown() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let types = repo.employment_types().await.expect("Query failed");
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].employment_type, "Full-Time");
    assert_eq!(types[0].count, 2);
    assert_eq!(types[1].employment_type, "Contract");
    assert_eq!(types[1].count, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_department_analytics_aggregates() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let stats = repo.department_analytics().await.expect("Query failed");
    assert_eq!(stats.len(), 2);

    let production = &stats[0];
    assert_eq!(production.department, "Production");
    assert_eq!(production.employee_count, 2);
    assert_eq!(production.avg_salary, Some(81500.0));
    assert_eq!(production.current_employees, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_role_department_mapping_orders_by_confidence() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let mappings = repo.role_department_mapping().await.expect("Query failed");
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0].role, "Video Editor");
    assert_eq!(mappings[0].validation_status, "validated");
    assert!(mappings[0].confidence_score > mappings[1].confidence_score);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_data_quality_checks() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let missing = repo.missing_data_checks().await.expect("Query failed");
    assert_eq!(missing.len(), 2);
    let applicants = missing
        .iter()
        .find(|c| c.table_name == "applicants")
        .expect("applicants check missing");
    assert_eq!(applicants.total_records, 4);
    assert_eq!(applicants.missing_names, 0);

    let consistency = repo.name_consistency().await.expect("Query failed");
    assert_eq!(consistency.applicants_with_names, 4);
    assert_eq!(consistency.employees_with_names, 3);
    assert_eq!(consistency.matching_names, 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_hiring_success_skips_roles_without_applicants() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let records = repo.hiring_success().await.expect("Query failed");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].role, "Data Analyst");
    assert!((records[0].success_rate - 100.0).abs() < f64::EPSILON);
    assert!(records.iter().all(|r| r.total_applicants > 0));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_employee_sources_split() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    let sources = repo.employee_sources().await.expect("Query failed");
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].source_type, "Application Process");
    assert_eq!(sources[0].count, 2);
    assert_eq!(sources[1].source_type, "Direct Hire/Transfer");
    assert_eq!(sources[1].count, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ping() {
    let db = TestDatabase::new().await;
    let repo = PgReportRepository::new(db.pool());

    repo.ping().await.expect("Ping failed");
}
