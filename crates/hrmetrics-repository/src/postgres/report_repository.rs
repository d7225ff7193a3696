//! PostgreSQL report repository implementation.

use crate::{traits::ReportRepository, DatabasePool};
use async_trait::async_trait;
use hrmetrics_core::{
    ApplicantStatusCount, ConsistencyCheck, DepartmentStats, EmployeeSourceCount,
    EmploymentTypeCount, HiringMetric, HiringSuccessRecord, HrResult, MasterEmployeeRecord,
    MissingDataCheck, RoleDepartmentMapping,
};
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL report repository.
///
/// The `hr_analytics` schema (base tables plus precomputed views such as
/// `enhanced_hiring_metrics` and `master_employee_view`) is owned by the
/// database; every query casts its columns to a fixed wire type so row
/// decoding does not depend on how a view happens to type an expression.
#[derive(Clone)]
pub struct PgReportRepository {
    pool: Arc<DatabasePool>,
}

impl PgReportRepository {
    /// Creates a new PostgreSQL report repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn hiring_metrics(&self) -> HrResult<Vec<HiringMetric>> {
        debug!("Fetching hiring metrics");

        let rows = sqlx::query_as::<_, HiringMetric>(
            r#"
            SELECT
                "Role" AS role,
                department,
                total_applicants::bigint AS total_applicants,
                hired_count::bigint AS hired_count,
                conversion_rate::double precision AS conversion_rate,
                avg_time_to_hire_days::double precision AS avg_time_to_hire
            FROM hr_analytics.enhanced_hiring_metrics
            ORDER BY conversion_rate DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn applicant_status_summary(&self) -> HrResult<Vec<ApplicantStatusCount>> {
        debug!("Fetching applicant status summary");

        let rows = sqlx::query_as::<_, ApplicantStatusCount>(
            r#"
            SELECT
                "Status" AS status,
                COUNT(*)::bigint AS count,
                ROUND((COUNT(*) * 100.0) / SUM(COUNT(*)) OVER (), 2)::double precision AS percentage
            FROM hr_analytics.applicants
            GROUP BY "Status"
            ORDER BY count DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn master_employee_view(&self) -> HrResult<Vec<MasterEmployeeRecord>> {
        debug!("Fetching master employee view");

        let rows = sqlx::query_as::<_, MasterEmployeeRecord>(
            r#"
            SELECT
                "ID"::bigint AS id,
                "Name" AS name,
                "Salary"::double precision AS salary,
                "Department" AS department,
                "Start Date"::date AS start_date,
                "End Date"::date AS end_date,
                "Employment Type" AS employment_type,
                applied_role,
                "Application Date"::date AS application_date,
                application_status,
                employment_status,
                days_to_hire::double precision AS days_to_hire
            FROM hr_analytics.master_employee_view
            ORDER BY "ID"
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn employment_types(&self) -> HrResult<Vec<EmploymentTypeCount>> {
        debug!("Fetching employment type breakdown");

        let rows = sqlx::query_as::<_, EmploymentTypeCount>(
            r#"
            SELECT
                "Employment Type" AS employment_type,
                COUNT(*)::bigint AS count,
                ROUND((COUNT(*) * 100.0) / SUM(COUNT(*)) OVER (), 2)::double precision AS percentage
            FROM hr_analytics."Employment type"
            GROUP BY "Employment Type"
            ORDER BY count DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn department_analytics(&self) -> HrResult<Vec<DepartmentStats>> {
        debug!("Fetching department analytics");

        let rows = sqlx::query_as::<_, DepartmentStats>(
            r#"
            SELECT
                "Department" AS department,
                COUNT(*)::bigint AS employee_count,
                AVG("Salary")::double precision AS avg_salary,
                COUNT(CASE WHEN "End Date" IS NULL THEN 1 END)::bigint AS current_employees
            FROM hr_analytics.employees
            GROUP BY "Department"
            ORDER BY employee_count DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn role_department_mapping(&self) -> HrResult<Vec<RoleDepartmentMapping>> {
        debug!("Fetching role-department mapping validation");

        let rows = sqlx::query_as::<_, RoleDepartmentMapping>(
            r#"
            SELECT
                "Role" AS role,
                "Department" AS department,
                "Confidence_Score"::double precision AS confidence_score,
                "Mapping_Type" AS mapping_type,
                "Validation_Status" AS validation_status
            FROM hr_analytics.role_department_mapping
            ORDER BY "Confidence_Score" DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn missing_data_checks(&self) -> HrResult<Vec<MissingDataCheck>> {
        debug!("Fetching missing data checks");

        let rows = sqlx::query_as::<_, MissingDataCheck>(
            r#"
            SELECT
                'applicants' AS table_name,
                COUNT(*)::bigint AS total_records,
                COUNT(CASE WHEN "Name" IS NULL OR "Name" = '' THEN 1 END)::bigint AS missing_names,
                COUNT(CASE WHEN "Role" IS NULL OR "Role" = '' THEN 1 END)::bigint AS missing_roles
            FROM hr_analytics.applicants
            UNION ALL
            SELECT
                'employees' AS table_name,
                COUNT(*)::bigint AS total_records,
                COUNT(CASE WHEN "Name" IS NULL OR "Name" = '' THEN 1 END)::bigint AS missing_names,
                COUNT(CASE WHEN "Department" IS NULL OR "Department" = '' THEN 1 END)::bigint AS missing_roles
            FROM hr_analytics.employees
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn name_consistency(&self) -> HrResult<ConsistencyCheck> {
        debug!("Fetching name consistency check");

        let row = sqlx::query_as::<_, ConsistencyCheck>(
            r#"
            SELECT
                COUNT(DISTINCT a."Name")::bigint AS applicants_with_names,
                COUNT(DISTINCT e."Name")::bigint AS employees_with_names,
                COUNT(DISTINCT CASE WHEN a."Name" = e."Name" THEN a."Name" END)::bigint AS matching_names
            FROM hr_analytics.applicants a
            FULL OUTER JOIN hr_analytics.employees e ON a."Name" = e."Name"
            "#,
        )
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row)
    }

    async fn hiring_success(&self) -> HrResult<Vec<HiringSuccessRecord>> {
        debug!("Fetching hiring success analysis");

        let rows = sqlx::query_as::<_, HiringSuccessRecord>(
            r#"
            SELECT
                "Role" AS role,
                department,
                total_applicants::bigint AS total_applicants,
                hired_count::bigint AS hired_count,
                ROUND((hired_count * 100.0) / total_applicants, 2)::double precision AS success_rate,
                avg_time_to_hire_days::double precision AS avg_time_to_hire
            FROM hr_analytics.enhanced_hiring_metrics
            WHERE total_applicants > 0
            ORDER BY success_rate DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn employee_sources(&self) -> HrResult<Vec<EmployeeSourceCount>> {
        debug!("Fetching employee source analysis");

        let rows = sqlx::query_as::<_, EmployeeSourceCount>(
            r#"
            SELECT
                CASE
                    WHEN a."Name" IS NOT NULL THEN 'Application Process'
                    ELSE 'Direct Hire/Transfer'
                END AS source_type,
                COUNT(*)::bigint AS count,
                ROUND((COUNT(*) * 100.0) / SUM(COUNT(*)) OVER (), 2)::double precision AS percentage
            FROM hr_analytics.employees e
            LEFT JOIN hr_analytics.applicants a
                ON e."Name" = a."Name" AND a."Status" = 'Hired'
            GROUP BY
                CASE
                    WHEN a."Name" IS NOT NULL THEN 'Application Process'
                    ELSE 'Direct Hire/Transfer'
                END
            ORDER BY count DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> HrResult<()> {
        self.pool.health_check().await
    }
}
