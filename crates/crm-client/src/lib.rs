//! CRM egress client for the commission dashboards.
//!
//! This crate owns everything that talks to the third-party CRM: the
//! reqwest client, pagination, and the wire models. The core crate only
//! consumes the [`DealProvider`] and [`AgentDirectory`] traits, so tests
//! and alternative backends can swap the transport out entirely.

pub mod client;
pub mod errors;
pub mod models;
pub mod traits;

pub use client::{CrmConfig, TldCrmClient};
pub use errors::CrmError;
pub use models::{AgentRecord, DealListItem};
pub use traits::{AgentDirectory, DealProvider};
