//! Paper service - uploads, edits and ownership-checked access

use std::sync::Arc;

use chrono::Utc;
use researchd_domain::{
    FileRecord, FileUpload, NewFile, PaperDetail, PaperMetadata, ResearchdError, Result,
};
use serde::Serialize;
use tracing::{info, warn};

use super::ports::{PublicationRepository, StoredPaper};
use super::validation::{normalize_metadata, validate_metadata};
use crate::blob_ports::{discard_blob, BlobKind, BlobLocation, BlobStore};
use crate::profile::ports::ProfileRepository;
use crate::uploads::{blob_name, display_name, validate_paper};
use crate::utils::forms::validation_error;

/// A file the caller may read, with where to read it from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub file: FileRecord,
    #[serde(skip)]
    pub location: BlobLocation,
}

/// Paper service
pub struct PaperService {
    profiles: Arc<dyn ProfileRepository>,
    publications: Arc<dyn PublicationRepository>,
    blobs: Arc<dyn BlobStore>,
    max_upload_bytes: u64,
}

impl PaperService {
    /// Create a new paper service
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        publications: Arc<dyn PublicationRepository>,
        blobs: Arc<dyn BlobStore>,
        max_upload_bytes: u64,
    ) -> Self {
        Self { profiles, publications, blobs, max_upload_bytes }
    }

    /// Validate, store the PDF, then record the file and publication in
    /// one transaction.
    ///
    /// A blob written for a failed commit is removed again.
    pub async fn upload_paper(
        &self,
        user_id: i64,
        metadata: PaperMetadata,
        upload: FileUpload,
    ) -> Result<StoredPaper> {
        validate_metadata(&metadata).map_err(validation_error)?;
        let ext = validate_paper(&upload, self.max_upload_bytes).map_err(validation_error)?;
        let metadata = normalize_metadata(metadata);

        let profile = self.profiles.get_or_create(user_id).await?;
        let (file, reference) = self.store_pdf(&upload, &ext).await?;

        match self.publications.create_with_file(profile.id, metadata, file).await {
            Ok(paper) => {
                info!(user_id, publication_id = paper.publication.id, "paper uploaded");
                Ok(paper)
            }
            Err(err) => {
                warn!(user_id, error = %err, "paper upload failed after blob write");
                discard_blob(self.blobs.as_ref(), &reference).await;
                Err(err)
            }
        }
    }

    /// Overwrite metadata and optionally replace the file.
    ///
    /// The old blob is removed only after the replacement commits.
    pub async fn edit_paper(
        &self,
        user_id: i64,
        publication_id: i64,
        metadata: PaperMetadata,
        new_file: Option<FileUpload>,
    ) -> Result<StoredPaper> {
        let not_found = || ResearchdError::not_found("publication", publication_id);

        validate_metadata(&metadata).map_err(validation_error)?;
        let ext = match &new_file {
            Some(upload) => Some(validate_paper(upload, self.max_upload_bytes).map_err(validation_error)?),
            None => None,
        };
        let metadata = normalize_metadata(metadata);

        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(not_found)?;
        if self.publications.find_owned(profile.id, publication_id).await?.is_none() {
            return Err(not_found());
        }

        let stored = match (&new_file, &ext) {
            (Some(upload), Some(ext)) => Some(self.store_pdf(upload, ext).await?),
            _ => None,
        };
        let (file, reference) = match stored {
            Some((file, reference)) => (Some(file), Some(reference)),
            None => (None, None),
        };

        let outcome = self
            .publications
            .update(profile.id, publication_id, metadata, file)
            .await
            .and_then(|update| update.ok_or_else(not_found));
        let update = match outcome {
            Ok(update) => update,
            Err(err) => {
                if let Some(reference) = &reference {
                    discard_blob(self.blobs.as_ref(), reference).await;
                }
                return Err(err);
            }
        };

        if let Some(replaced) = &update.replaced {
            discard_blob(self.blobs.as_ref(), &replaced.storage_ref).await;
        }
        info!(user_id, publication_id, file_replaced = update.replaced.is_some(), "paper edited");
        Ok(update.paper)
    }

    /// Resolve a file for download.
    ///
    /// Ownership is checked before the reference is handed to the store.
    pub async fn download_reference(&self, user_id: i64, file_id: i64) -> Result<Download> {
        let denied = || ResearchdError::AccessDenied("Access denied".to_string());

        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(denied)?;
        let file = self
            .publications
            .find_file(file_id)
            .await?
            .filter(|file| file.profile_id == profile.id)
            .ok_or_else(|| {
                warn!(user_id, file_id, "download denied");
                denied()
            })?;

        let location = self.blobs.resolve(&file.storage_ref).await?;
        Ok(Download { file, location })
    }

    /// All of the user's papers, newest first
    pub async fn my_papers(&self, user_id: i64) -> Result<Vec<StoredPaper>> {
        let profile = self.profiles.get_or_create(user_id).await?;
        self.publications.list_with_files(profile.id).await
    }

    /// Public paper detail
    pub async fn get_paper(&self, publication_id: i64) -> Result<PaperDetail> {
        self.publications
            .find_detail(publication_id)
            .await?
            .ok_or_else(|| ResearchdError::not_found("publication", publication_id))
    }

    pub async fn delete_paper(&self, user_id: i64, publication_id: i64) -> Result<()> {
        let not_found = || ResearchdError::not_found("publication", publication_id);
        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(not_found)?;
        let removed = self
            .publications
            .delete_owned(profile.id, publication_id)
            .await?
            .ok_or_else(not_found)?;

        if let Some(file) = &removed.file {
            discard_blob(self.blobs.as_ref(), &file.storage_ref).await;
        }
        info!(user_id, publication_id, "paper deleted");
        Ok(())
    }

    /// Delete a stored file; a publication linked to it loses its file.
    pub async fn delete_file(&self, user_id: i64, file_id: i64) -> Result<()> {
        let not_found = || ResearchdError::not_found("file", file_id);
        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(not_found)?;
        let file = self.publications.delete_file(profile.id, file_id).await?.ok_or_else(not_found)?;

        discard_blob(self.blobs.as_ref(), &file.storage_ref).await;
        info!(user_id, file_id, "file deleted");
        Ok(())
    }

    async fn store_pdf(&self, upload: &FileUpload, ext: &str) -> Result<(NewFile, String)> {
        let name = blob_name(&upload.filename, ext, Utc::now());
        let reference = self.blobs.put(BlobKind::Paper, &name, &upload.bytes).await?;

        let file = NewFile {
            file_name: display_name(&upload.filename, ext),
            file_type: Some(ext.to_string()),
            file_size: i64::try_from(upload.len()).unwrap_or(i64::MAX),
            storage_ref: reference.clone(),
        };
        Ok((file, reference))
    }
}
