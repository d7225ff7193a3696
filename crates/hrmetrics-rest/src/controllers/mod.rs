//! REST API controllers.

pub mod health_controller;
pub mod report_controller;
