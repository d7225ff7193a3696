//! # HR Metrics REST
//!
//! REST API layer using Axum for the HR Metrics reporting service.
//! Provides one endpoint per named report plus a health check.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
