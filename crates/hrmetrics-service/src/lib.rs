//! # HR Metrics Service
//!
//! Business logic layer for the HR Metrics reporting service: the in-process
//! response cache and the report service that owns it.

pub mod cache;
pub mod dto;
pub mod report_service;
mod report_service_impl;

pub use cache::*;
pub use dto::*;
pub use report_service::*;
pub use report_service_impl::ReportServiceImpl;
