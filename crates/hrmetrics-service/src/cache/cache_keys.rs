//! Cache key generators for consistent key naming.
//!
//! Keys are derived deterministically from the report being requested, so the
//! same logical request always maps to the same entry.

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "hrmetrics:report";

/// Key for the hiring metrics report.
#[must_use]
pub fn hiring_metrics() -> String {
    format!("{}:hiring_metrics", CACHE_PREFIX)
}

/// Key for the applicant status summary report.
#[must_use]
pub fn applicant_status_summary() -> String {
    format!("{}:applicant_status_summary", CACHE_PREFIX)
}

/// Key for the master employee view report.
#[must_use]
pub fn master_employee_view() -> String {
    format!("{}:master_employee_view", CACHE_PREFIX)
}

/// Key for the employment type breakdown report.
#[must_use]
pub fn employment_types() -> String {
    format!("{}:employment_types", CACHE_PREFIX)
}

/// Key for the department analytics report.
#[must_use]
pub fn department_analytics() -> String {
    format!("{}:department_analytics", CACHE_PREFIX)
}

/// Key for the role-department mapping validation report.
#[must_use]
pub fn role_department_validation() -> String {
    format!("{}:role_department_validation", CACHE_PREFIX)
}

/// Key for the data quality analysis report.
#[must_use]
pub fn data_quality_analysis() -> String {
    format!("{}:data_quality_analysis", CACHE_PREFIX)
}

/// Key for the hiring success analysis report.
#[must_use]
pub fn hiring_success_analysis() -> String {
    format!("{}:hiring_success_analysis", CACHE_PREFIX)
}

/// Key for the employee source analysis report.
#[must_use]
pub fn employee_source_analysis() -> String {
    format!("{}:employee_source_analysis", CACHE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(hiring_metrics(), "hrmetrics:report:hiring_metrics");
        assert_eq!(
            role_department_validation(),
            "hrmetrics:report:role_department_validation"
        );
    }

    #[test]
    fn test_keys_are_deterministic_and_distinct() {
        assert_eq!(master_employee_view(), master_employee_view());

        let keys = [
            hiring_metrics(),
            applicant_status_summary(),
            master_employee_view(),
            employment_types(),
            department_analytics(),
            role_department_validation(),
            data_quality_analysis(),
            hiring_success_analysis(),
            employee_source_analysis(),
        ];
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }
}
