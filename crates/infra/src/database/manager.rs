//! Database connection manager backed by the shared SQLite pool.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use researchd_common::storage::{SqliteConnection, SqlitePool, SqlitePoolConfig};
use researchd_domain::{DatabaseConfig, Result};
use rusqlite::params;
use tokio::task;
use tracing::info;

use crate::errors::{map_join_error, InfraError, InfraResult};

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager that wraps an [`SqlitePool`].
pub struct DbManager {
    pool: SqlitePool,
    path: PathBuf,
}

impl DbManager {
    /// Create a new manager with the given pool size.
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let config = SqlitePoolConfig::default().with_max_size(pool_size.max(1));

        let pool = SqlitePool::new(&path, config).map_err(InfraError::from)?;

        info!(
            db_path = %path.display(),
            max_connections = pool.max_size(),
            "sqlite pool initialised"
        );

        Ok(Self { pool, path })
    }

    /// Create a manager from the `[database]` configuration section.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::new(&config.path, config.pool_size)
    }

    /// Acquire a connection from the pool.
    pub fn get_connection(&self) -> Result<SqliteConnection> {
        Ok(self.pool.get_connection().map_err(InfraError::from)?)
    }

    /// Run blocking database work on the blocking thread pool.
    ///
    /// The closure receives a pooled connection; its `InfraError` is turned
    /// into the domain error on the way out.
    pub async fn with_connection<T, F>(self: &Arc<Self>, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> InfraResult<T> + Send + 'static,
    {
        let db = Arc::clone(self);
        task::spawn_blocking(move || -> Result<T> {
            let mut conn = db.pool.get_connection().map_err(InfraError::from)?;
            Ok(f(&mut conn)?)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Ensure the full schema exists on the current database.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        create_schema(&conn)?;
        Ok(())
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Perform a health check to verify database connectivity.
    pub fn health_check(&self) -> Result<()> {
        Ok(self.pool.health_check().map_err(InfraError::from)?)
    }
}

fn create_schema(conn: &SqliteConnection) -> InfraResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, CAST(strftime('%s','now') AS INTEGER))",
        params![SCHEMA_VERSION],
    )?;
    Ok(())
}
