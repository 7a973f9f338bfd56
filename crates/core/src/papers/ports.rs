//! Port interfaces for publications and their stored files

use async_trait::async_trait;
use researchd_domain::{FileRecord, NewFile, PaperDetail, PaperMetadata, Publication, Result};
use serde::{Deserialize, Serialize};

/// A publication with its linked file metadata, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPaper {
    pub publication: Publication,
    pub file: Option<FileRecord>,
}

/// Outcome of an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperUpdate {
    pub paper: StoredPaper,
    /// File row removed because a new file replaced it
    pub replaced: Option<FileRecord>,
}

/// Trait for publication persistence
#[async_trait]
pub trait PublicationRepository: Send + Sync {
    /// Insert the file row and the publication referencing it together
    async fn create_with_file(
        &self,
        profile_id: i64,
        metadata: PaperMetadata,
        file: NewFile,
    ) -> Result<StoredPaper>;

    /// `None` when missing or owned by another profile
    async fn find_owned(&self, profile_id: i64, publication_id: i64) -> Result<Option<StoredPaper>>;

    async fn find_detail(&self, publication_id: i64) -> Result<Option<PaperDetail>>;

    /// Overwrite metadata. With `new_file`, also insert it, repoint the
    /// publication and delete the previous file row, all in one
    /// transaction. `None` when not owned.
    async fn update(
        &self,
        profile_id: i64,
        publication_id: i64,
        metadata: PaperMetadata,
        new_file: Option<NewFile>,
    ) -> Result<Option<PaperUpdate>>;

    /// Newest first (creation time, then id descending)
    async fn list_by_profile(&self, profile_id: i64, limit: Option<usize>) -> Result<Vec<Publication>>;

    /// Newest first, with file metadata
    async fn list_with_files(&self, profile_id: i64) -> Result<Vec<StoredPaper>>;

    /// Delete the publication and its file row; returns what was removed
    async fn delete_owned(&self, profile_id: i64, publication_id: i64) -> Result<Option<StoredPaper>>;

    async fn find_file(&self, file_id: i64) -> Result<Option<FileRecord>>;

    /// Delete a file row; a linked publication keeps existing with no file
    async fn delete_file(&self, profile_id: i64, file_id: i64) -> Result<Option<FileRecord>>;
}
