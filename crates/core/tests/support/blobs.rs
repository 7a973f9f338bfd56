//! In-memory blob stores

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use researchd_core::{BlobKind, BlobLocation, BlobStore};
use researchd_domain::{is_external_reference, ResearchdError, Result};

/// Keeps blobs in a map; `fail_puts` makes every write fail.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
    fail_puts: AtomicBool,
}

impl MemoryBlobStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail_puts.store(true, Ordering::SeqCst);
        store
    }

    pub fn references(&self) -> Vec<String> {
        self.blobs.lock().expect("blob map poisoned").keys().cloned().collect()
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.blobs.lock().expect("blob map poisoned").contains_key(reference)
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().expect("blob map poisoned").len()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, kind: BlobKind, name: &str, bytes: &[u8]) -> Result<String> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(ResearchdError::Storage("disk full".into()));
        }
        let reference = format!("{}/{name}", kind.prefix());
        let mut blobs = self.blobs.lock().expect("blob map poisoned");
        if blobs.contains_key(&reference) {
            return Err(ResearchdError::Storage(format!("{reference} already exists")));
        }
        blobs.insert(reference.clone(), bytes.to_vec());
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<()> {
        self.blobs.lock().expect("blob map poisoned").remove(reference);
        Ok(())
    }

    async fn resolve(&self, reference: &str) -> Result<BlobLocation> {
        if is_external_reference(reference) {
            return Ok(BlobLocation::External(reference.to_string()));
        }
        if reference.contains("..") {
            return Err(ResearchdError::AccessDenied("Access denied".into()));
        }
        Ok(BlobLocation::Local(PathBuf::from("/blobs").join(reference)))
    }
}
