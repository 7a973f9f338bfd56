//! Directory search over users and their (optional) profiles

use std::sync::Arc;

use async_trait::async_trait;
use researchd_core::directory::ports::{DirectoryRepository, RawFacets};
use researchd_domain::{
    split_comma_list, DirectoryEntry, Result as DomainResult, SearchQuery, SearchSort,
};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

use super::manager::DbManager;
use super::rows::escape_like;
use crate::errors::InfraResult;

const DIRECTORY_FROM: &str = "FROM users u LEFT JOIN profiles p ON p.user_id = u.id";

const DIRECTORY_COLUMNS: &str = "u.id, u.first_name, u.last_name, p.id, p.title, p.institution, \
     p.department, p.position, p.profile_picture, p.research_interests";

const BY_NAME: &str = "u.last_name COLLATE NOCASE, u.first_name COLLATE NOCASE, u.id";

/// SQLite-backed implementation of `DirectoryRepository`
pub struct SqliteDirectoryRepository {
    db: Arc<DbManager>,
}

impl SqliteDirectoryRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectoryRepository for SqliteDirectoryRepository {
    async fn search(&self, query: &SearchQuery) -> DomainResult<(Vec<DirectoryEntry>, i64)> {
        let query = query.clone();
        self.db.with_connection(move |conn| run_search(conn, &query)).await
    }

    async fn facets(&self) -> DomainResult<RawFacets> {
        self.db
            .with_connection(|conn| {
                Ok(RawFacets {
                    institutions: distinct_column(conn, "institution")?,
                    positions: distinct_column(conn, "position")?,
                    interest_strings: distinct_column(conn, "research_interests")?,
                })
            })
            .await
    }
}

/// WHERE clause and its positional arguments
struct Filter {
    clauses: Vec<String>,
    args: Vec<Value>,
}

impl Filter {
    fn new() -> Self {
        Self { clauses: Vec::new(), args: Vec::new() }
    }

    /// Push an argument and return its `?N` placeholder
    fn bind(&mut self, value: impl Into<Value>) -> String {
        self.args.push(value.into());
        format!("?{}", self.args.len())
    }

    fn sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }
}

fn build_filter(query: &SearchQuery) -> Filter {
    let mut filter = Filter::new();

    if !query.query.is_empty() {
        let p = filter.bind(format!("%{}%", escape_like(&query.query)));
        let matches = ["u.first_name", "u.last_name", "p.institution", "p.position", "p.research_interests"]
            .iter()
            .map(|column| folded_like(column, &p))
            .collect::<Vec<_>>();
        filter.clauses.push(format!("({})", matches.join(" OR ")));
    }
    if let Some(institution) = &query.filters.institution {
        let p = filter.bind(institution.clone());
        filter.clauses.push(format!("p.institution = {p}"));
    }
    if let Some(position) = &query.filters.position {
        let p = filter.bind(position.clone());
        filter.clauses.push(format!("p.position = {p}"));
    }
    if let Some(interests) = &query.filters.interests {
        let p = filter.bind(format!("%{}%", escape_like(interests)));
        filter.clauses.push(folded_like("p.research_interests", &p));
    }

    filter
}

/// Case-insensitive substring match that also folds non-ASCII letters
fn folded_like(column: &str, placeholder: &str) -> String {
    format!("casefold({column}) LIKE casefold({placeholder}) ESCAPE '\\'")
}

fn order_by(sort: SearchSort) -> String {
    match sort {
        SearchSort::Name => format!("ORDER BY {BY_NAME}"),
        SearchSort::Institution => format!(
            "ORDER BY COALESCE(TRIM(p.institution), '') = '', p.institution COLLATE NOCASE, {BY_NAME}"
        ),
        SearchSort::Position => format!(
            "ORDER BY COALESCE(TRIM(p.position), '') = '', p.position COLLATE NOCASE, {BY_NAME}"
        ),
    }
}

fn run_search(conn: &Connection, query: &SearchQuery) -> InfraResult<(Vec<DirectoryEntry>, i64)> {
    let mut filter = build_filter(query);
    let where_sql = filter.sql();

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) {DIRECTORY_FROM} {where_sql}"),
        params_from_iter(filter.args.iter()),
        |row| row.get(0),
    )?;

    let limit = filter.bind(query.page_size);
    let offset = filter.bind(query.offset());
    let sql = format!(
        "SELECT {DIRECTORY_COLUMNS} {DIRECTORY_FROM} {where_sql} {} LIMIT {limit} OFFSET {offset}",
        order_by(query.sort)
    );

    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(params_from_iter(filter.args.iter()), map_entry_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok((items, total))
}

/// Distinct non-blank values of a profile column; `column` is a fixed name
fn distinct_column(conn: &Connection, column: &'static str) -> InfraResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT DISTINCT {column} FROM profiles WHERE COALESCE(TRIM({column}), '') <> ''"
    ))?;
    let values = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(values)
}

fn map_entry_row(row: &Row<'_>) -> rusqlite::Result<DirectoryEntry> {
    let interests: Option<String> = row.get(9)?;
    Ok(DirectoryEntry {
        user_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        profile_id: row.get(3)?,
        title: row.get(4)?,
        institution: row.get(5)?,
        department: row.get(6)?,
        position: row.get(7)?,
        profile_picture: row.get(8)?,
        research_interests: interests.as_deref().map(split_comma_list).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use researchd_domain::SearchFilters;

    use super::*;

    #[test]
    fn empty_query_has_no_where_clause() {
        let filter = build_filter(&SearchQuery::default());
        assert_eq!(filter.sql(), "");
        assert!(filter.args.is_empty());
    }

    #[test]
    fn keyword_and_filters_are_conjunctive() {
        let query = SearchQuery {
            query: "50%".into(),
            filters: SearchFilters {
                institution: Some("Monash University".into()),
                position: None,
                interests: Some("genomics".into()),
            },
            ..Default::default()
        };
        let filter = build_filter(&query);

        assert_eq!(filter.clauses.len(), 3);
        assert!(filter.sql().starts_with("WHERE ("));
        assert_eq!(filter.args[0], Value::Text("%50\\%%".into()));
        assert_eq!(filter.args[1], Value::Text("Monash University".into()));
        assert!(filter.clauses[2].starts_with("casefold(p.research_interests) LIKE casefold(?3)"));
    }

    #[test]
    fn keyword_match_folds_every_column() {
        let query = SearchQuery { query: "Ångström".into(), ..Default::default() };
        let filter = build_filter(&query);

        assert_eq!(filter.clauses[0].matches("casefold(?1)").count(), 5);
        assert!(filter.clauses[0].contains("casefold(u.last_name) LIKE casefold(?1) ESCAPE '\\'"));
    }
}
