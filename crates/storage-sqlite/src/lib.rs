//! SQLite storage implementation for the commission report history.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `paycycle-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The report history repository
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist; everything else works with the core traits.

pub mod db;
pub mod errors;
pub mod reports;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from paycycle-core for convenience
pub use paycycle_core::errors::{DatabaseError, Error, Result};
