//! Statement ingestion module - parse, normalize, filter, aggregate.

mod csv_parser;
mod statements_errors;
mod statements_model;
mod statements_service;
mod statements_traits;


pub use csv_parser::{parse_statement_sheet, ParsedSheet};
pub use statements_errors::StatementError;
pub use statements_model::{
    normalize_row, parse_advance_amount, AgentSummary, DealRecord, PaidStatus, StatementSummary,
    StatementTotals,
};
pub use statements_service::StatementService;
pub use statements_traits::StatementServiceTrait;
