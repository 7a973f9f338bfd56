//! Command plumbing: execution wrapper, logging setup and health types

pub mod command_helpers;
pub mod health;
pub mod logging;
