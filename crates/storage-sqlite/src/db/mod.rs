//! Connection pooling, migrations, and the single-writer actor.

mod write_actor;

pub use write_actor::{spawn_writer, WriteHandle};

use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

use crate::errors::StorageError;
use paycycle_core::errors::{DatabaseError, Error, Result};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Creates the r2d2 connection pool for the given SQLite file path.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

/// Checks out one connection from the pool.
pub fn get_connection(pool: &Arc<DbPool>) -> Result<DbConnection> {
    pool.get().map_err(|e| StorageError::PoolError(e).into())
}

/// Applies pending embedded migrations.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))
        .map_err(Error::from)?;
    if !applied.is_empty() {
        info!("Applied {} database migrations", applied.len());
    }
    Ok(())
}

/// Full storage bring-up: pool, migrations, and the writer actor.
///
/// Must be called from within a Tokio runtime; the writer actor is a
/// spawned task holding one dedicated connection.
pub fn init(db_path: &str) -> Result<(Arc<DbPool>, WriteHandle)> {
    let pool = create_pool(db_path)?;

    let mut conn = get_connection(&pool)?;
    run_migrations(&mut conn)?;
    drop(conn);

    let writer = spawn_writer(pool.as_ref().clone());
    Ok((pool, writer))
}
