//! Publications, stored files and photos

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::text::split_comma_list;

/// Paper metadata as entered on the upload and edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperMetadata {
    pub title: String,
    pub authors: String,
    pub journal: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub doi: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub profile_id: i64,
    pub title: String,
    pub authors: Option<String>,
    pub journal: Option<String>,
    pub year: Option<i32>,
    pub publication_date: Option<NaiveDate>,
    pub doi: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub keywords: Option<String>,
    /// Cleared when the linked file is deleted
    pub file_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Publication {
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords.as_deref().map(split_comma_list).unwrap_or_default()
    }

    pub fn author_list(&self) -> Vec<String> {
        self.authors.as_deref().map(split_comma_list).unwrap_or_default()
    }
}

/// Metadata row for a stored blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    pub profile_id: i64,
    /// Original (client-supplied) name
    pub file_name: String,
    /// Lower-cased extension
    pub file_type: Option<String>,
    pub file_size: i64,
    /// Blob store reference, or an external URL for seeded rows
    pub storage_ref: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFile {
    pub file_name: String,
    pub file_type: Option<String>,
    pub file_size: i64,
    pub storage_ref: String,
}

/// Public paper detail: the publication, its file metadata and the owner's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDetail {
    pub publication: Publication,
    pub file: Option<FileRecord>,
    pub owner_user_id: i64,
    pub owner_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub profile_id: i64,
    pub storage_ref: String,
    pub caption: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// An uploaded file as received from the client: claimed name plus raw bytes
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { filename: filename.into(), bytes: bytes.into() }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("filename", &self.filename)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
