//! # HR Metrics Core
//!
//! Core types shared across all layers of the HR Metrics reporting service:
//! the unified error type, result alias, and the typed rows returned by the
//! named analytics reports.

pub mod error;
pub mod reports;
pub mod result;

pub use error::*;
pub use reports::*;
pub use result::*;
