//! SQLite pragma management
//!
//! Applies per-connection pragmas. Foreign keys are a per-connection setting
//! in SQLite, so cascade and set-null rules only hold when every pooled
//! connection has them switched on. The same goes for application-defined
//! SQL functions, which are registered here alongside the pragmas.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use super::config::SqlitePoolConfig;
use crate::storage::error::{StorageError, StorageResult};

/// Apply connection-level pragmas
///
/// These pragmas are applied to each connection in the pool:
/// - WAL mode for concurrent readers
/// - NORMAL synchronous mode
/// - Foreign key constraints
/// - Busy timeout for handling lock contention
/// - The `casefold` scalar function
pub fn apply_connection_pragmas(conn: &Connection, config: &SqlitePoolConfig) -> StorageResult<()> {
    let mut pragma_sql = String::new();

    if config.enable_wal {
        pragma_sql.push_str("PRAGMA journal_mode=WAL;\n");
        pragma_sql.push_str("PRAGMA wal_autocheckpoint=1000;\n");
    }

    pragma_sql.push_str("PRAGMA synchronous=NORMAL;\n");

    if config.enable_foreign_keys {
        pragma_sql.push_str("PRAGMA foreign_keys=ON;\n");
    }

    conn.execute_batch(&pragma_sql)
        .map_err(|e| StorageError::Query(format!("Failed to apply pragmas: {e}")))?;

    conn.busy_timeout(config.busy_timeout)
        .map_err(|e| StorageError::Query(format!("Failed to set busy timeout: {e}")))?;

    register_casefold(conn)?;

    Ok(())
}

/// Name of the Unicode-aware lower-casing SQL function.
pub const CASEFOLD_FUNCTION: &str = "casefold";

/// Register `casefold(text)` on a connection.
///
/// SQLite's built-in `lower()` and `LIKE` only fold ASCII letters, so
/// `casefold(col) LIKE casefold(?)` is the case-insensitive match for
/// accented text. NULL stays NULL.
pub fn register_casefold(conn: &Connection) -> StorageResult<()> {
    conn.create_scalar_function(
        CASEFOLD_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|v| v.to_lowercase()))
        },
    )
    .map_err(|e| StorageError::Query(format!("Failed to register {CASEFOLD_FUNCTION}: {e}")))
}
