//! # HR Metrics Repository
//!
//! Data access layer for the HR Metrics reporting service. Each named report
//! is a fixed SQL statement against the `hr_analytics` schema, executed
//! through SQLx over a shared PostgreSQL pool.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
