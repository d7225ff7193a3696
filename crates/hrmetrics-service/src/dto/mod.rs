//! Data transfer objects for the service layer.

mod report_dto;

pub use report_dto::*;
