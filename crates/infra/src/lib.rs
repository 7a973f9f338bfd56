//! # researchd Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite repositories for users, profiles, entries, papers and the directory
//! - The local filesystem blob store
//! - Argon2 password hashing
//! - Configuration loading (environment, JSON/TOML files)
//!
//! ## Architecture
//! - Implements traits defined in `researchd-core`
//! - Depends on `researchd-common`, `researchd-domain` and `researchd-core`
//! - Contains all "impure" code (database, filesystem)

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod storage;

// Re-export commonly used items
pub use auth::*;
pub use database::*;
pub use errors::{InfraError, InfraResult};
pub use storage::*;
