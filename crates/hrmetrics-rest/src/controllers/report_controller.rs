//! Report controller: one GET endpoint per named report.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use hrmetrics_core::{
    ApplicantStatusCount, DepartmentStats, EmployeeSourceCount, EmploymentTypeCount,
    HiringSuccessRecord, RoleDepartmentMapping,
};
use hrmetrics_service::{DataQualityResponse, HiringMetricsResponse, MasterEmployeeResponse};
use tracing::debug;

/// Creates the report router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hiring-metrics", get(hiring_metrics))
        .route("/applicants/status-summary", get(applicant_status_summary))
        .route("/master-employee-view", get(master_employee_view))
        .route("/employment-types", get(employment_types))
        .route("/department-analytics", get(department_analytics))
        .route("/role-department-validation", get(role_department_validation))
        .route("/data-quality-analysis", get(data_quality_analysis))
        .route("/hiring-success-analysis", get(hiring_success_analysis))
        .route("/employee-source-analysis", get(employee_source_analysis))
}

/// Per-role hiring funnel with the aggregate summary block.
#[utoipa::path(
    get,
    path = "/hiring-metrics",
    tag = "reports",
    responses(
        (status = 200, description = "Hiring metrics per role", body = HiringMetricsResponse),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn hiring_metrics(State(state): State<AppState>) -> ApiResult<HiringMetricsResponse> {
    debug!("Hiring metrics request");
    ok(state.report_service.hiring_metrics().await?)
}

/// Applicant counts per application status.
#[utoipa::path(
    get,
    path = "/applicants/status-summary",
    tag = "reports",
    responses(
        (status = 200, description = "Applicant counts per status", body = [ApplicantStatusCount]),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn applicant_status_summary(
    State(state): State<AppState>,
) -> ApiResult<Vec<ApplicantStatusCount>> {
    debug!("Applicant status summary request");
    ok(state.report_service.applicant_status_summary().await?)
}

/// The master employee view.
#[utoipa::path(
    get,
    path = "/master-employee-view",
    tag = "reports",
    responses(
        (status = 200, description = "Employee records with application data", body = MasterEmployeeResponse),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn master_employee_view(
    State(state): State<AppState>,
) -> ApiResult<MasterEmployeeResponse> {
    debug!("Master employee view request");
    ok(state.report_service.master_employee_view().await?)
}

/// Employee counts per employment type.
#[utoipa::path(
    get,
    path = "/employment-types",
    tag = "reports",
    responses(
        (status = 200, description = "Employment type distribution", body = [EmploymentTypeCount]),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn employment_types(
    State(state): State<AppState>,
) -> ApiResult<Vec<EmploymentTypeCount>> {
    debug!("Employment types request");
    ok(state.report_service.employment_types().await?)
}

/// Headcount and salary aggregates per department.
#[utoipa::path(
    get,
    path = "/department-analytics",
    tag = "reports",
    responses(
        (status = 200, description = "Department aggregates", body = [DepartmentStats]),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn department_analytics(
    State(state): State<AppState>,
) -> ApiResult<Vec<DepartmentStats>> {
    debug!("Department analytics request");
    ok(state.report_service.department_analytics().await?)
}

/// Role-to-department mapping validation.
#[utoipa::path(
    get,
    path = "/role-department-validation",
    tag = "reports",
    responses(
        (status = 200, description = "Mapping rows with validation state", body = [RoleDepartmentMapping]),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn role_department_validation(
    State(state): State<AppState>,
) -> ApiResult<Vec<RoleDepartmentMapping>> {
    debug!("Role-department validation request");
    ok(state.report_service.role_department_validation().await?)
}

/// Missing-data and consistency checks.
#[utoipa::path(
    get,
    path = "/data-quality-analysis",
    tag = "reports",
    responses(
        (status = 200, description = "Data quality checks", body = DataQualityResponse),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn data_quality_analysis(
    State(state): State<AppState>,
) -> ApiResult<DataQualityResponse> {
    debug!("Data quality analysis request");
    ok(state.report_service.data_quality_analysis().await?)
}

/// Per-role hiring success rates.
#[utoipa::path(
    get,
    path = "/hiring-success-analysis",
    tag = "reports",
    responses(
        (status = 200, description = "Hiring success per role", body = [HiringSuccessRecord]),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn hiring_success_analysis(
    State(state): State<AppState>,
) -> ApiResult<Vec<HiringSuccessRecord>> {
    debug!("Hiring success analysis request");
    ok(state.report_service.hiring_success_analysis().await?)
}

/// Employee counts per hiring source.
#[utoipa::path(
    get,
    path = "/employee-source-analysis",
    tag = "reports",
    responses(
        (status = 200, description = "Hiring source distribution", body = [EmployeeSourceCount]),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn employee_source_analysis(
    State(state): State<AppState>,
) -> ApiResult<Vec<EmployeeSourceCount>> {
    debug!("Employee source analysis request");
    ok(state.report_service.employee_source_analysis().await?)
}
