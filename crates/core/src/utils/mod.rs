//! Helpers shared by the services

pub mod forms;

pub use forms::{clean_optional, clean_required, validation_error};
