//! OpenAPI documentation configuration.

use hrmetrics_core::{
    ApplicantStatusCount, ConsistencyCheck, DepartmentStats, EmployeeSourceCount,
    EmploymentTypeCount, ErrorResponse, HiringMetric, HiringSuccessRecord, MasterEmployeeRecord,
    MissingDataCheck, RoleDepartmentMapping,
};
use hrmetrics_service::{
    DataQualityResponse, HiringMetricsResponse, HiringMetricsSummary, MasterEmployeeResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the HR Metrics API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Metrics API",
        version = "1.0.0",
        description = "REST API for the HR analytics reporting service"
    ),
    paths(
        crate::controllers::report_controller::hiring_metrics,
        crate::controllers::report_controller::applicant_status_summary,
        crate::controllers::report_controller::master_employee_view,
        crate::controllers::report_controller::employment_types,
        crate::controllers::report_controller::department_analytics,
        crate::controllers::report_controller::role_department_validation,
        crate::controllers::report_controller::data_quality_analysis,
        crate::controllers::report_controller::hiring_success_analysis,
        crate::controllers::report_controller::employee_source_analysis,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            HiringMetric,
            ApplicantStatusCount,
            MasterEmployeeRecord,
            EmploymentTypeCount,
            DepartmentStats,
            RoleDepartmentMapping,
            MissingDataCheck,
            ConsistencyCheck,
            HiringSuccessRecord,
            EmployeeSourceCount,
            HiringMetricsResponse,
            HiringMetricsSummary,
            MasterEmployeeResponse,
            DataQualityResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "reports", description = "Named analytics reports"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Registers the HTTP basic auth security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}
