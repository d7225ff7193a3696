//! Typed rows for the named analytics reports.
//!
//! Each struct mirrors the columns of one report's SQL statement against the
//! `hr_analytics` schema. The schema itself (tables and precomputed views) is
//! owned by the database; these types only describe the tabular result shape.
//!
//! All rows are serializable both ways: the response cache stores them as
//! type-erased JSON and deserializes them on a hit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the `enhanced_hiring_metrics` view: per-role hiring funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HiringMetric {
    pub role: String,
    pub department: Option<String>,
    pub total_applicants: i64,
    pub hired_count: i64,
    /// Hired / applicants, as a percentage.
    pub conversion_rate: f64,
    pub avg_time_to_hire: Option<f64>,
}

/// Applicant count and share for one application status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApplicantStatusCount {
    pub status: String,
    pub count: i64,
    pub percentage: f64,
}

/// One row of the `master_employee_view`: employee record joined with the
/// matching application, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MasterEmployeeRecord {
    pub id: i64,
    pub name: String,
    pub salary: Option<f64>,
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub employment_type: Option<String>,
    pub applied_role: Option<String>,
    pub application_date: Option<NaiveDate>,
    pub application_status: Option<String>,
    pub employment_status: Option<String>,
    pub days_to_hire: Option<f64>,
}

/// Employee count and share for one employment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmploymentTypeCount {
    pub employment_type: String,
    pub count: i64,
    pub percentage: f64,
}

/// Headcount and salary aggregates for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DepartmentStats {
    pub department: String,
    pub employee_count: i64,
    pub avg_salary: Option<f64>,
    /// Employees without an end date.
    pub current_employees: i64,
}

/// One row of the role-to-department mapping table with its validation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RoleDepartmentMapping {
    pub role: String,
    pub department: String,
    pub confidence_score: f64,
    pub mapping_type: String,
    pub validation_status: String,
}

/// Missing-field counts for one source table.
///
/// The report unions two checks into one shape, so `missing_roles` counts
/// missing roles for the applicants row and missing departments for the
/// employees row. The key carries the first check's name for both rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MissingDataCheck {
    pub table_name: String,
    pub total_records: i64,
    pub missing_names: i64,
    pub missing_roles: i64,
}

/// Name overlap between the applicants and employees tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConsistencyCheck {
    pub applicants_with_names: i64,
    pub employees_with_names: i64,
    pub matching_names: i64,
}

/// Per-role hiring success rate, restricted to roles with applicants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HiringSuccessRecord {
    pub role: String,
    pub department: Option<String>,
    pub total_applicants: i64,
    pub hired_count: i64,
    pub success_rate: f64,
    pub avg_time_to_hire: Option<f64>,
}

/// Employee count and share per hiring source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeSourceCount {
    /// "Application Process" or "Direct Hire/Transfer".
    pub source_type: String,
    pub count: i64,
    pub percentage: f64,
}
