//! Storage primitives for the SQLite-backed repositories
//!
//! This module provides the r2d2 connection pool, the pooled connection
//! wrapper, per-connection pragmas and the storage error type.

pub mod error;
pub mod sqlite;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use sqlite::{apply_connection_pragmas, SqliteConnection, SqlitePool, SqlitePoolConfig};
