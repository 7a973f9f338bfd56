//! Argon2id implementation of the account `PasswordHasher` port

use researchd_common::crypto::{hash_password, verify_password};
use researchd_core::account::ports::PasswordHasher;
use researchd_domain::Result;

use crate::errors::InfraError;

/// Stateless hasher; parameters come from `argon2` defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(hash_password(password).map_err(InfraError::from)?)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(verify_password(password, hash).map_err(InfraError::from)?)
    }
}
