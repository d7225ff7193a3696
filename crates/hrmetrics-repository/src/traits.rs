//! Repository trait definitions.

use async_trait::async_trait;
use hrmetrics_core::{
    ApplicantStatusCount, ConsistencyCheck, DepartmentStats, EmployeeSourceCount,
    EmploymentTypeCount, HiringMetric, HiringSuccessRecord, HrResult, MasterEmployeeRecord,
    MissingDataCheck, RoleDepartmentMapping,
};

/// Report repository trait.
///
/// One method per named report; each executes that report's fixed SQL
/// statement and returns typed rows. Implementations must not cache: the
/// response cache sits in the service layer, in front of these calls.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Per-role hiring funnel from the `enhanced_hiring_metrics` view,
    /// ordered by conversion rate.
    async fn hiring_metrics(&self) -> HrResult<Vec<HiringMetric>>;

    /// Applicant counts grouped by application status.
    async fn applicant_status_summary(&self) -> HrResult<Vec<ApplicantStatusCount>>;

    /// All rows of the `master_employee_view`, ordered by employee id.
    async fn master_employee_view(&self) -> HrResult<Vec<MasterEmployeeRecord>>;

    /// Employee counts grouped by employment type.
    async fn employment_types(&self) -> HrResult<Vec<EmploymentTypeCount>>;

    /// Headcount and salary aggregates per department.
    async fn department_analytics(&self) -> HrResult<Vec<DepartmentStats>>;

    /// Role-to-department mapping rows with validation state, ordered by
    /// confidence score.
    async fn role_department_mapping(&self) -> HrResult<Vec<RoleDepartmentMapping>>;

    /// Missing-field counts for the applicants and employees tables.
    async fn missing_data_checks(&self) -> HrResult<Vec<MissingDataCheck>>;

    /// Name overlap between applicants and employees.
    async fn name_consistency(&self) -> HrResult<ConsistencyCheck>;

    /// Per-role hiring success rates, restricted to roles with applicants.
    async fn hiring_success(&self) -> HrResult<Vec<HiringSuccessRecord>>;

    /// Employee counts per hiring source.
    async fn employee_sources(&self) -> HrResult<Vec<EmployeeSourceCount>>;

    /// Pings the database. Used by the health endpoint; never cached.
    async fn ping(&self) -> HrResult<()>;
}
