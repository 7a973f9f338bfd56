//! SQLite connection pool configuration

use std::time::Duration;

use crate::storage::error::{StorageError, StorageResult};

/// SQLite pool configuration
#[derive(Debug, Clone)]
pub struct SqlitePoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,

    /// Connection timeout
    pub connection_timeout: Duration,

    /// Busy timeout for SQLite operations
    pub busy_timeout: Duration,

    /// Enable WAL journal mode
    pub enable_wal: bool,

    /// Enable foreign key constraints
    pub enable_foreign_keys: bool,
}

impl Default for SqlitePoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_millis(5000),
            enable_wal: true,
            enable_foreign_keys: true,
        }
    }
}

impl SqlitePoolConfig {
    /// Set the maximum pool size
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `StorageError::InvalidConfig` when the pool size or timeouts
    /// are out of range.
    pub fn validate(&self) -> StorageResult<()> {
        if self.max_size == 0 {
            return Err(StorageError::InvalidConfig("max_size must be greater than 0".into()));
        }
        if self.max_size > 100 {
            return Err(StorageError::InvalidConfig("max_size too large (max: 100)".into()));
        }
        if self.connection_timeout.is_zero() {
            return Err(StorageError::InvalidConfig(
                "connection_timeout must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
