//! # researchd Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for persistence, blobs and hashing
//! - Services: accounts, profiles, papers, directory search
//! - Upload validation (extension and content sniffing)
//!
//! ## Architecture Principles
//! - Only depends on `researchd-common` and `researchd-domain`
//! - No database, HTTP, or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod account;
pub mod directory;
pub mod papers;
pub mod profile;
pub mod uploads;
pub mod utils;

// Infrastructure ports
pub mod blob_ports;

// Re-export specific items to avoid ambiguity
pub use account::ports::{PasswordHasher, UserRepository};
pub use account::AccountService;
pub use blob_ports::{discard_blob, BlobKind, BlobLocation, BlobStore};
pub use directory::ports::{DirectoryRepository, RawFacets};
pub use directory::DirectoryService;
pub use papers::ports::{PaperUpdate, PublicationRepository};
pub use papers::{Download, PaperService, StoredPaper};
pub use profile::ports::{EntryRepository, ProfileChanges, ProfileRepository};
pub use profile::ProfileService;
