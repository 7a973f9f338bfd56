//! Port interface for uploaded-file storage
//!
//! A blob store keeps opaque bytes under a generated name and hands back a
//! reference string. References are namespaced by [`BlobKind`].

use std::path::PathBuf;

use async_trait::async_trait;
use researchd_domain::Result;

/// Namespace a blob is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobKind {
    Paper,
    Photo,
    ProfilePicture,
}

impl BlobKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Paper => "papers",
            Self::Photo => "photos",
            Self::ProfilePicture => "pictures",
        }
    }
}

/// Where a reference can be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobLocation {
    /// A file inside the store's root
    Local(PathBuf),
    /// A URL recorded verbatim (seeded data)
    External(String),
}

/// Trait for blob persistence
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `name` and return the reference.
    ///
    /// Never overwrites an existing blob. Failures surface as
    /// `ResearchdError::Storage`.
    async fn put(&self, kind: BlobKind, name: &str, bytes: &[u8]) -> Result<String>;

    /// Remove a blob. Removing a missing blob succeeds.
    async fn delete(&self, reference: &str) -> Result<()>;

    /// Map a reference to a readable location.
    ///
    /// References that escape the store root are rejected with
    /// `ResearchdError::AccessDenied`.
    async fn resolve(&self, reference: &str) -> Result<BlobLocation>;
}

/// Best-effort removal used after a commit or to undo an orphaned write.
///
/// External references are left alone; failures are logged, not returned.
pub async fn discard_blob(store: &dyn BlobStore, reference: &str) {
    if researchd_domain::is_external_reference(reference) {
        return;
    }
    if let Err(err) = store.delete(reference).await {
        tracing::warn!(reference, error = %err, "failed to remove blob");
    }
}
