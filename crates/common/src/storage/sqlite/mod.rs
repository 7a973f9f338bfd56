//! SQLite backend implementation
//!
//! Provides an r2d2-based connection pool for SQLite databases with foreign
//! key enforcement switched on for every pooled connection.

pub mod config;
pub mod connection;
pub mod pool;
pub mod pragmas;

pub use config::SqlitePoolConfig;
pub use connection::SqliteConnection;
pub use pool::SqlitePool;
pub use pragmas::apply_connection_pragmas;
