//! Profile aggregation: get-or-create, the composed profile view, partial
//! updates and child collections

pub mod ports;
pub mod service;
mod validation;

pub use ports::{EntryRepository, ProfileChanges, ProfileRepository};
pub use service::ProfileService;
