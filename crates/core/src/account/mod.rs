//! Registration and credential verification

pub mod ports;
pub mod service;

pub use ports::{PasswordHasher, UserRepository};
pub use service::AccountService;
