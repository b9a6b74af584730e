//! Paycycle Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the commission
//! tracking application: the biweekly cycle calendar, the commission
//! rules engine, the statement ingestion pipeline, and the report
//! history contract. It is database- and network-agnostic and defines
//! traits that are implemented by the `storage-sqlite` and `crm-client`
//! crates.

pub mod auth;
pub mod commissions;
pub mod constants;
pub mod cycles;
pub mod deals;
pub mod errors;
pub mod reports;
pub mod statements;
pub mod utils;
pub mod vendors;

// Re-export common types from the commission and cycle modules
pub use commissions::*;
pub use cycles::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
