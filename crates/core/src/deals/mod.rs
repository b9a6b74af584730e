//! Deal metrics module - cycle snapshots and date-bucketed counts over
//! the CRM deal feed.

mod deals_model;
mod deals_service;
mod deals_traits;

#[cfg(test)]
mod deals_service_tests;

pub use deals_model::{AgentCycleSnapshot, DealCounts};
pub use deals_service::DealMetricsService;
pub use deals_traits::DealMetricsServiceTrait;
