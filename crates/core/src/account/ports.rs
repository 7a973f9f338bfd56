//! Port interfaces for user accounts
//!
//! These traits define the boundaries between account logic and the
//! infrastructure that stores users and hashes credentials.

use async_trait::async_trait;
use researchd_domain::{NewUser, ProfileFields, Result, User};

/// Trait for user persistence and retrieval
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and its profile in one transaction.
    ///
    /// Fails with `ResearchdError::Conflict` when the email is taken.
    async fn create_with_profile(&self, user: NewUser, profile: ProfileFields) -> Result<User>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Lookup by already-normalized (trimmed, lower-cased) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// One-way credential hashing.
///
/// Implementations are CPU-bound; services call them off the async runtime.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    /// `Ok(false)` on mismatch
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}
