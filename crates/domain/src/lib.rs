//! # researchd Domain
//!
//! Business domain types and models for researchd.
//!
//! This crate contains:
//! - Entity types (User, Profile, Publication, etc.) and their input shapes
//! - The typed section-order model
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (field limits, form choices)
//!
//! ## Architecture
//! - No dependencies on other researchd crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::text::{file_extension, is_external_reference, resolve_choice, sanitize_filename, split_comma_list};
