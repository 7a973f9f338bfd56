//! Directory search service

use std::collections::BTreeSet;
use std::sync::Arc;

use researchd_domain::{
    split_comma_list, FacetValues, Pagination, Result, SearchConfig, SearchPage, SearchQuery,
};
use tracing::debug;

use super::ports::{DirectoryRepository, RawFacets};

/// Directory search service
pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepository>,
    config: SearchConfig,
}

impl DirectoryService {
    /// Create a new directory service
    pub fn new(repository: Arc<dyn DirectoryRepository>, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    /// Run a directory search.
    ///
    /// Paging is clamped before the query runs; a page past the end comes
    /// back empty with correct totals.
    pub async fn search(&self, query: SearchQuery) -> Result<SearchPage> {
        let query = query.normalized(self.config.default_page_size, self.config.max_page_size);

        let ((items, total), raw) =
            tokio::try_join!(self.repository.search(&query), self.repository.facets())?;

        debug!(
            query = %query.query,
            sort = %query.sort,
            page = query.page,
            total,
            returned = items.len(),
            "directory search"
        );

        Ok(SearchPage {
            items,
            pagination: Pagination::new(query.page, query.page_size, total),
            facets: build_facets(raw),
            query,
        })
    }

    /// Facet values alone, for rendering filter controls
    pub async fn facets(&self) -> Result<FacetValues> {
        Ok(build_facets(self.repository.facets().await?))
    }
}

fn build_facets(raw: RawFacets) -> FacetValues {
    let interests = raw.interest_strings.iter().flat_map(|s| split_comma_list(s));

    FacetValues {
        institutions: distinct_sorted(raw.institutions),
        positions: distinct_sorted(raw.positions),
        interests: distinct_sorted(interests),
    }
}

/// Trimmed, non-empty, deduplicated; ordered case-insensitively with the
/// exact spelling as tie-breaker.
fn distinct_sorted(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let unique: BTreeSet<String> = values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();

    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    sorted
}
