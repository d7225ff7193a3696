//! Report response DTOs.
//!
//! Most reports go out as bare row arrays; these types cover the reports that
//! carry an extra envelope or a computed summary block. Everything here must
//! round-trip through JSON because responses are cached type-erased.

use hrmetrics_core::{ConsistencyCheck, HiringMetric, MasterEmployeeRecord, MissingDataCheck};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hiring metrics rows plus the aggregate summary block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HiringMetricsResponse {
    pub metrics: Vec<HiringMetric>,
    pub summary: HiringMetricsSummary,
}

/// Aggregates computed over the hiring metrics rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HiringMetricsSummary {
    pub total_roles: usize,
    /// Mean conversion rate across roles, rounded to two decimals.
    pub avg_conversion_rate: f64,
    /// Mean time to hire across roles that have one, rounded to one decimal.
    pub avg_time_to_hire: f64,
}

impl HiringMetricsSummary {
    /// Computes the summary block from the report rows.
    #[must_use]
    pub fn from_metrics(metrics: &[HiringMetric]) -> Self {
        let total_roles = metrics.len();

        let avg_conversion_rate = if metrics.is_empty() {
            0.0
        } else {
            let sum: f64 = metrics.iter().map(|m| m.conversion_rate).sum();
            round_to(sum / metrics.len() as f64, 2)
        };

        let times: Vec<f64> = metrics.iter().filter_map(|m| m.avg_time_to_hire).collect();
        let avg_time_to_hire = if times.is_empty() {
            0.0
        } else {
            round_to(times.iter().sum::<f64>() / times.len() as f64, 1)
        };

        Self {
            total_roles,
            avg_conversion_rate,
            avg_time_to_hire,
        }
    }
}

/// Master employee view rows wrapped in their envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MasterEmployeeResponse {
    pub employees: Vec<MasterEmployeeRecord>,
}

/// Data quality analysis: missing-field checks plus the name consistency
/// cross-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataQualityResponse {
    pub missing_data: Vec<MissingDataCheck>,
    pub consistency: ConsistencyCheck,
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
