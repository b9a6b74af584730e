//! Report history module - the date-keyed aggregate results of processed
//! statements.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::Report;
pub use reports_service::ReportService;
pub use reports_traits::{ReportRepositoryTrait, ReportServiceTrait};
