//! Local filesystem blob store
//!
//! Blobs live at `<root>/<kind prefix>/<name>`; the reference handed back is
//! the root-relative path with forward slashes.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use researchd_core::blob_ports::{BlobKind, BlobLocation, BlobStore};
use researchd_domain::{is_external_reference, ResearchdError, Result};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Blob store rooted at a local directory
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create the store, creating `root` if it does not exist.
    pub async fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            ResearchdError::Storage(format!("cannot create blob root {}: {e}", root.display()))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root-relative path for a local reference, or `AccessDenied` if it
    /// would leave the root.
    fn local_path(&self, reference: &str) -> Result<PathBuf> {
        let relative = Path::new(reference);
        let escapes = reference.is_empty()
            || reference.contains('\\')
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            warn!(reference, "rejected blob reference outside the store root");
            return Err(ResearchdError::AccessDenied("Access denied".into()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, kind: BlobKind, name: &str, bytes: &[u8]) -> Result<String> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ResearchdError::Storage(format!("invalid blob name: {name:?}")));
        }

        let dir = self.root.join(kind.prefix());
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ResearchdError::Storage(format!("cannot create {}: {e}", dir.display())))?;

        let path = dir.join(name);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    ResearchdError::Storage(format!("blob already exists: {name}"))
                }
                _ => ResearchdError::Storage(format!("cannot create blob {name}: {e}")),
            })?;

        let written = async {
            file.write_all(bytes).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = written {
            drop(file);
            let _ = fs::remove_file(&path).await;
            return Err(ResearchdError::Storage(format!("cannot write blob {name}: {e}")));
        }

        let reference = format!("{}/{name}", kind.prefix());
        debug!(reference = %reference, size = bytes.len(), "blob stored");
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<()> {
        if is_external_reference(reference) {
            return Ok(());
        }
        let path = self.local_path(reference)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(reference, "blob removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ResearchdError::Storage(format!("cannot remove blob {reference}: {e}"))),
        }
    }

    async fn resolve(&self, reference: &str) -> Result<BlobLocation> {
        if is_external_reference(reference) {
            return Ok(BlobLocation::External(reference.to_string()));
        }
        Ok(BlobLocation::Local(self.local_path(reference)?))
    }
}
