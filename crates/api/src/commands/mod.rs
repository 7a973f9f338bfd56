//! Commands - the boundary callers drive the services through
//!
//! Each command takes the [`AppContext`](crate::context::AppContext), runs
//! one service operation through
//! [`execute_command`](crate::utils::command_helpers::execute_command) and
//! returns a sanitized result.

mod accounts;
mod database;
mod directory;
mod health;
mod papers;
mod profile;

pub use accounts::*;
pub use database::*;
pub use directory::*;
pub use health::*;
pub use papers::*;
pub use profile::*;
