//! Directory search types

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;

/// Directory sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSort {
    /// Last name, then first name
    #[default]
    Name,
    /// Institution (empty last), then name
    Institution,
    /// Position (empty last), then name
    Position,
}

crate::impl_domain_status_conversions!(SearchSort {
    Name => "name",
    Institution => "institution",
    Position => "position",
});

/// Facet filters, conjunctive with the keyword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    /// Exact match
    pub institution: Option<String>,
    /// Exact match
    pub position: Option<String>,
    /// Case-insensitive substring of the interests string
    pub interests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub query: String,
    pub filters: SearchFilters,
    pub sort: SearchSort,
    pub page: i64,
    pub page_size: i64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: SearchFilters::default(),
            sort: SearchSort::Name,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// Trim text inputs, drop blank filters and clamp paging.
    ///
    /// `page < 1` becomes 1; a non-positive page size becomes
    /// `default_page_size`; anything above `max_page_size` is capped.
    pub fn normalized(mut self, default_page_size: i64, max_page_size: i64) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        }

        self.query = self.query.trim().to_string();
        self.filters.institution = clean(self.filters.institution);
        self.filters.position = clean(self.filters.position);
        self.filters.interests = clean(self.filters.interests);
        self.page = self.page.max(1);
        if self.page_size < 1 {
            self.page_size = default_page_size;
        }
        self.page_size = self.page_size.clamp(1, max_page_size.max(1));
        self
    }

    /// Row offset of the first item on the requested page
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }
}

/// Total-count-derived paging metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = if total <= 0 { 0 } else { (total + page_size - 1) / page_size };
        let has_prev = page > 1;
        let has_next = page < total_pages;
        Self {
            page,
            page_size,
            total,
            total_pages,
            has_prev,
            has_next,
            prev_page: has_prev.then(|| page - 1),
            next_page: has_next.then(|| page + 1),
        }
    }
}

/// One researcher in the directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// `None` for users whose profile row was never created
    pub profile_id: Option<i64>,
    pub title: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub profile_picture: Option<String>,
    pub research_interests: Vec<String>,
}

/// Distinct non-empty values for building filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValues {
    pub institutions: Vec<String>,
    pub positions: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub items: Vec<DirectoryEntry>,
    pub pagination: Pagination,
    pub facets: FacetValues,
    /// The normalized query the page was produced for
    pub query: SearchQuery,
}
