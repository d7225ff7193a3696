//! Report service trait definition.

use crate::dto::{DataQualityResponse, HiringMetricsResponse, MasterEmployeeResponse};
use async_trait::async_trait;
use hrmetrics_core::{
    ApplicantStatusCount, DepartmentStats, EmployeeSourceCount, EmploymentTypeCount,
    HiringSuccessRecord, HrResult, RoleDepartmentMapping,
};

/// Report service trait.
///
/// One operation per named report. Every operation is cache-transparent: a
/// caller cannot tell whether a result was freshly computed or replayed,
/// except through latency. `ping` is the exception - health checks bypass the
/// cache by design.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Hiring metrics rows plus their computed summary block.
    async fn hiring_metrics(&self) -> HrResult<HiringMetricsResponse>;

    /// Applicant counts per application status.
    async fn applicant_status_summary(&self) -> HrResult<Vec<ApplicantStatusCount>>;

    /// The master employee view.
    async fn master_employee_view(&self) -> HrResult<MasterEmployeeResponse>;

    /// Employee counts per employment type.
    async fn employment_types(&self) -> HrResult<Vec<EmploymentTypeCount>>;

    /// Headcount and salary aggregates per department.
    async fn department_analytics(&self) -> HrResult<Vec<DepartmentStats>>;

    /// Role-to-department mapping validation rows.
    async fn role_department_validation(&self) -> HrResult<Vec<RoleDepartmentMapping>>;

    /// Missing-data and consistency checks.
    async fn data_quality_analysis(&self) -> HrResult<DataQualityResponse>;

    /// Per-role hiring success analysis.
    async fn hiring_success_analysis(&self) -> HrResult<Vec<HiringSuccessRecord>>;

    /// Employee counts per hiring source.
    async fn employee_source_analysis(&self) -> HrResult<Vec<EmployeeSourceCount>>;

    /// Pings the database, bypassing the cache.
    async fn ping(&self) -> HrResult<()>;
}
