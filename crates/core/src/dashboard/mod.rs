//! Dashboard module - per-user portfolio summary.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{DashboardSummary, HoldingSummary};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};

#[cfg(test)]
mod dashboard_service_tests;
