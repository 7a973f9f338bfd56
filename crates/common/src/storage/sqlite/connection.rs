//! Pooled SQLite connection wrapper

use std::ops::{Deref, DerefMut};

use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection as RusqliteConnection, OptionalExtension, Row, ToSql, Transaction, TransactionBehavior};
use tracing::instrument;

use crate::storage::error::{StorageError, StorageResult};

/// Pooled SQLite connection
///
/// The connection is returned to the pool when dropped. It dereferences to
/// the underlying [`rusqlite::Connection`] so repositories can use the full
/// rusqlite API.
pub struct SqliteConnection {
    inner: PooledConnection<SqliteConnectionManager>,
}

impl SqliteConnection {
    /// Create a new connection wrapper from a pooled connection
    pub fn new(conn: PooledConnection<SqliteConnectionManager>) -> Self {
        Self { inner: conn }
    }

    /// Execute a query that returns at most one row.
    ///
    /// `QueryReturnedNoRows` is mapped to `Ok(None)`.
    #[instrument(skip(self, params, f), fields(sql = %sql))]
    pub fn query_optional<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> StorageResult<Option<T>>
    where
        F: FnOnce(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        self.inner.query_row(sql, params, f).optional().map_err(StorageError::from)
    }

    /// Begin a deferred transaction
    #[instrument(skip(self))]
    pub fn begin(&mut self) -> StorageResult<Transaction<'_>> {
        self.inner.transaction().map_err(StorageError::from)
    }

    /// Begin an `IMMEDIATE` transaction.
    ///
    /// The write lock is taken up front, so read-then-write sequences inside
    /// the transaction (for example `MAX(sort_order) + 1`) cannot interleave
    /// with another writer.
    #[instrument(skip(self))]
    pub fn begin_immediate(&mut self) -> StorageResult<Transaction<'_>> {
        self.inner
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(StorageError::from)
    }
}

impl Deref for SqliteConnection {
    type Target = RusqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SqliteConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
