//! Report service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{
    DataQualityResponse, HiringMetricsResponse, HiringMetricsSummary, MasterEmployeeResponse,
};
use crate::report_service::ReportService;
use async_trait::async_trait;
use hrmetrics_core::{
    ApplicantStatusCount, DepartmentStats, EmployeeSourceCount, EmploymentTypeCount,
    HiringSuccessRecord, HrResult, RoleDepartmentMapping,
};
use hrmetrics_repository::ReportRepository;
use std::sync::Arc;
use tracing::debug;

/// Report service backed by a repository with a response cache in front.
///
/// On a miss the repository fetch runs and the assembled response is stored;
/// on a hit the stored response is replayed. A failed fetch propagates
/// unchanged and nothing is stored, so an error is never replayed as data.
pub struct ReportServiceImpl<R: ReportRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheInterface>,
}

impl<R: ReportRepository> ReportServiceImpl<R> {
    /// Creates a new report service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheInterface>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R: ReportRepository + 'static> ReportService for ReportServiceImpl<R> {
    async fn hiring_metrics(&self) -> HrResult<HiringMetricsResponse> {
        debug!("Serving hiring metrics report");

        self.cache
            .get_or_set(&cache_keys::hiring_metrics(), || async {
                let metrics = self.repository.hiring_metrics().await?;
                let summary = HiringMetricsSummary::from_metrics(&metrics);
                Ok(HiringMetricsResponse { metrics, summary })
            })
            .await
    }

    async fn applicant_status_summary(&self) -> HrResult<Vec<ApplicantStatusCount>> {
        debug!("Serving applicant status summary report");

        self.cache
            .get_or_set(&cache_keys::applicant_status_summary(), || async {
                self.repository.applicant_status_summary().await
            })
            .await
    }

    async fn master_employee_view(&self) -> HrResult<MasterEmployeeResponse> {
        debug!("Serving master employee view report");

        self.cache
            .get_or_set(&cache_keys::master_employee_view(), || async {
                let employees = self.repository.master_employee_view().await?;
                Ok(MasterEmployeeResponse { employees })
            })
            .await
    }

    async fn employment_types(&self) -> HrResult<Vec<EmploymentTypeCount>> {
        debug!("Serving employment type breakdown report");

        self.cache
            .get_or_set(&cache_keys::employment_types(), || async {
                self.repository.employment_types().await
            })
            .await
    }

    async fn department_analytics(&self) -> HrResult<Vec<DepartmentStats>> {
        debug!("Serving department analytics report");

        self.cache
            .get_or_set(&cache_keys::department_analytics(), || async {
                self.repository.department_analytics().await
            })
            .await
    }

    async fn role_department_validation(&self) -> HrResult<Vec<RoleDepartmentMapping>> {
        debug!("Serving role-department validation report");

        self.cache
            .get_or_set(&cache_keys::role_department_validation(), || async {
                self.repository.role_department_mapping().await
            })
            .await
    }

    async fn data_quality_analysis(&self) -> HrResult<DataQualityResponse> {
        debug!("Serving data quality analysis report");

        self.cache
            .get_or_set(&cache_keys::data_quality_analysis(), || async {
                let missing_data = self.repository.missing_data_checks().await?;
                let consistency = self.repository.name_consistency().await?;
                Ok(DataQualityResponse {
                    missing_data,
                    consistency,
                })
            })
            .await
    }

    async fn hiring_success_analysis(&self) -> HrResult<Vec<HiringSuccessRecord>> {
        debug!("Serving hiring success analysis report");

        self.cache
            .get_or_set(&cache_keys::hiring_success_analysis(), || async {
                self.repository.hiring_success().await
            })
            .await
    }

    async fn employee_source_analysis(&self) -> HrResult<Vec<EmployeeSourceCount>> {
        debug!("Serving employee source analysis report");

        self.cache
            .get_or_set(&cache_keys::employee_source_analysis(), || async {
                self.repository.employee_sources().await
            })
            .await
    }

    async fn ping(&self) -> HrResult<()> {
        // Health checks must observe the real database, never a cached state.
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use hrmetrics_core::{ConsistencyCheck, HiringMetric, HrError, MissingDataCheck};
    use mockall::mock;
    use mockall::predicate::*;

    mock! {
        Repo {}

        #[async_trait]
        impl ReportRepository for Repo {
            async fn hiring_metrics(&self) -> HrResult<Vec<HiringMetric>>;
            async fn applicant_status_summary(&self) -> HrResult<Vec<ApplicantStatusCount>>;
            async fn master_employee_view(&self) -> HrResult<Vec<hrmetrics_core::MasterEmployeeRecord>>;
            async fn employment_types(&self) -> HrResult<Vec<EmploymentTypeCount>>;
            async fn department_analytics(&self) -> HrResult<Vec<DepartmentStats>>;
            async fn role_department_mapping(&self) -> HrResult<Vec<RoleDepartmentMapping>>;
            async fn missing_data_checks(&self) -> HrResult<Vec<MissingDataCheck>>;
            async fn name_consistency(&self) -> HrResult<ConsistencyCheck>;
            async fn hiring_success(&self) -> HrResult<Vec<HiringSuccessRecord>>;
            async fn employee_sources(&self) -> HrResult<Vec<EmployeeSourceCount>>;
            async fn ping(&self) -> HrResult<()>;
        }
    }

    fn sample_metric() -> HiringMetric {
        HiringMetric {
            role: "Video Editor".to_string(),
            department: Some("Production".to_string()),
            total_applicants: 100,
            hired_count: 5,
            conversion_rate: 5.0,
            avg_time_to_hire: Some(12.0),
        }
    }

    fn service_with_cache(
        repo: MockRepo,
        cache: MemoryCache,
    ) -> ReportServiceImpl<MockRepo> {
        ReportServiceImpl::new(Arc::new(repo), Arc::new(cache))
    }

    #[tokio::test]
    async fn test_second_request_is_served_from_cache() {
        let mut repo = MockRepo::new();
        repo.expect_hiring_metrics()
            .times(1)
            .returning(|| Ok(vec![sample_metric()]));

        let service = service_with_cache(repo, MemoryCache::new(std::time::Duration::from_secs(300)));

        let first = service.hiring_metrics().await.unwrap();
        let second = service.hiring_metrics().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.summary.total_roles, 1);
        assert!((first.summary.avg_conversion_rate - 5.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates_and_is_not_cached() {
        let mut repo = MockRepo::new();
        let mut call = 0;
        repo.expect_employment_types().times(2).returning(move || {
            call += 1;
            if call == 1 {
                Err(HrError::database("connection reset"))
            } else {
                Ok(vec![EmploymentTypeCount {
                    employment_type: "Full-Time".to_string(),
                    count: 3,
                    percentage: 100.0,
                }])
            }
        });

        let service = service_with_cache(repo, MemoryCache::new(std::time::Duration::from_secs(300)));

        // The failure surfaces unchanged...
        let err = service.employment_types().await.unwrap_err();
        assert!(matches!(err, HrError::Database(_)));

        // ...and the next request fetches again instead of replaying it.
        let types = service.employment_types().await.unwrap();
        assert_eq!(types[0].count, 3);
    }

    #[tokio::test]
    async fn test_disabled_cache_fetches_every_time() {
        let mut repo = MockRepo::new();
        repo.expect_department_analytics().times(2).returning(|| {
            Ok(vec![DepartmentStats {
                department: "Production".to_string(),
                employee_count: 2,
                avg_salary: Some(81500.0),
                current_employees: 1,
            }])
        });

        let service = service_with_cache(repo, MemoryCache::disabled());

        service.department_analytics().await.unwrap();
        service.department_analytics().await.unwrap();
    }

    #[tokio::test]
    async fn test_data_quality_combines_both_checks() {
        let mut repo = MockRepo::new();
        repo.expect_missing_data_checks().times(1).returning(|| {
            Ok(vec![MissingDataCheck {
                table_name: "applicants".to_string(),
                total_records: 4,
                missing_names: 0,
                missing_roles: 1,
            }])
        });
        repo.expect_name_consistency().times(1).returning(|| {
            Ok(ConsistencyCheck {
                applicants_with_names: 4,
                employees_with_names: 3,
                matching_names: 2,
            })
        });

        let service = service_with_cache(repo, MemoryCache::new(std::time::Duration::from_secs(300)));

        let report = service.data_quality_analysis().await.unwrap();
        assert_eq!(report.missing_data.len(), 1);
        assert_eq!(report.consistency.matching_names, 2);

        // Second request replays the combined payload without new fetches.
        let replay = service.data_quality_analysis().await.unwrap();
        assert_eq!(replay, report);
    }

    #[tokio::test]
    async fn test_ping_bypasses_cache() {
        let mut repo = MockRepo::new();
        repo.expect_ping().times(2).returning(|| Ok(()));

        let service = service_with_cache(repo, MemoryCache::new(std::time::Duration::from_secs(300)));

        service.ping().await.unwrap();
        service.ping().await.unwrap();
    }
}
