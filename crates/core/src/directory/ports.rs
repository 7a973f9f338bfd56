//! Port interface for the directory query

use async_trait::async_trait;
use researchd_domain::{DirectoryEntry, Result, SearchQuery};

/// Distinct facet columns as stored, before splitting and sorting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFacets {
    pub institutions: Vec<String>,
    pub positions: Vec<String>,
    /// Whole research-interest strings, still comma-delimited
    pub interest_strings: Vec<String>,
}

/// Trait for directory queries
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// One page of matches plus the total match count.
    ///
    /// `query` is already normalized. Users without a profile row are
    /// included with empty profile fields.
    async fn search(&self, query: &SearchQuery) -> Result<(Vec<DirectoryEntry>, i64)>;

    async fn facets(&self) -> Result<RawFacets>;
}
