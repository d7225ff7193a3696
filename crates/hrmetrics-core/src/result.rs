//! Result type aliases for HR Metrics.

use crate::HrError;

/// A specialized `Result` type for HR Metrics operations.
pub type HrResult<T> = Result<T, HrError>;
