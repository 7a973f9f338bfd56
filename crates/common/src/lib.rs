//! Modular common utilities shared across researchd crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field validation primitives
//! - `observability`: tracing instrumentation (not included by default)
//! - `platform`: SQLite connection pooling and password hashing

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod validation;

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod crypto;
#[cfg(feature = "platform")]
pub mod storage;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "platform")]
pub use crypto::{hash_password, verify_password, PasswordError};
#[cfg(feature = "platform")]
pub use storage::{SqlitePool, SqlitePoolConfig, StorageError, StorageResult};
#[cfg(feature = "foundation")]
pub use validation::{
    EmailValidator, FieldError, FieldValidator, RangeValidator, StringValidator, UrlValidator,
    ValidationError, ValidationResult, Validator,
};
