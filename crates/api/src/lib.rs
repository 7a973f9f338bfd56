//! # researchd App
//!
//! Application layer - commands, wiring and the binary entry point.
//!
//! This crate contains:
//! - Commands (caller → service bridge with logging and error sanitization)
//! - Application context (dependency injection)
//! - Command-line parsing for the `researchd` binary
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
