//! Database implementations

pub mod directory_repository;
pub mod entry_repository;
pub mod manager;
pub mod profile_repository;
pub mod publication_repository;
mod rows;
pub mod seed;
pub mod user_repository;

pub use directory_repository::*;
pub use entry_repository::*;
pub use manager::*;
pub use profile_repository::*;
pub use publication_repository::*;
pub use seed::{seed_demo_data, SeedOutcome};
pub use user_repository::*;
