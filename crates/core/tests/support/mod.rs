//! Shared test helpers for `researchd-core` integration tests.
//!
//! These helpers provide in-memory ports so service tests can focus on
//! behaviour instead of storage.

#![allow(dead_code)]

pub mod blobs;
pub mod repositories;

use std::sync::Arc;

use researchd_core::{AccountService, DirectoryService, PaperService, ProfileService};
use researchd_domain::{Registration, SearchConfig, User};

use self::blobs::MemoryBlobStore;
use self::repositories::{MemoryStore, PlainHasher};

pub const MAX_UPLOAD_BYTES: u64 = 64 * 1024;

pub const PDF_BYTES: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n";
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

/// Every service wired to one in-memory store
pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub blobs: Arc<MemoryBlobStore>,
    pub accounts: AccountService,
    pub profiles: ProfileService,
    pub papers: PaperService,
    pub directory: DirectoryService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_blobs(Arc::new(MemoryBlobStore::default()))
    }

    pub fn with_blobs(blobs: Arc<MemoryBlobStore>) -> Self {
        let store = Arc::new(MemoryStore::default());
        Self {
            accounts: AccountService::new(store.clone(), Arc::new(PlainHasher)),
            profiles: ProfileService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
                blobs.clone(),
                MAX_UPLOAD_BYTES,
            ),
            papers: PaperService::new(store.clone(), store.clone(), blobs.clone(), MAX_UPLOAD_BYTES),
            directory: DirectoryService::new(store.clone(), SearchConfig::default()),
            store,
            blobs,
        }
    }

    pub async fn register(&self, first: &str, last: &str, email: &str) -> User {
        self.accounts
            .register(registration(first, last, email))
            .await
            .expect("registration should succeed")
    }
}

pub fn registration(first: &str, last: &str, email: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: "password123".to_string(),
        confirm_password: "password123".to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        ..Default::default()
    }
}
