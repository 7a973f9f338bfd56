//! Researcher directory commands

use researchd_domain::{FacetValues, Result, SearchPage, SearchQuery};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Keyword search with facet filters, sorting and paging
pub async fn search_directory(ctx: &AppContext, query: SearchQuery) -> Result<SearchPage> {
    execute_command("directory::search_directory", || ctx.directory.search(query)).await
}

/// Distinct institutions, positions and interests for filter controls
pub async fn directory_facets(ctx: &AppContext) -> Result<FacetValues> {
    execute_command("directory::directory_facets", || ctx.directory.facets()).await
}
