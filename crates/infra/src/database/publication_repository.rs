//! Publication and file repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use researchd_core::papers::ports::{PaperUpdate, PublicationRepository, StoredPaper};
use researchd_domain::{
    FileRecord, NewFile, PaperDetail, PaperMetadata, Publication, Result as DomainResult,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use super::manager::DbManager;
use super::rows::{date_at, date_to_sql, now_ts, timestamp_at};
use crate::errors::InfraResult;

/// Publication columns (0..=12) followed by the joined file columns (13..=19)
const PAPER_SELECT: &str = "SELECT p.id, p.profile_id, p.title, p.authors, p.journal, p.year,
            p.publication_date, p.doi, p.url, p.abstract, p.keywords, p.file_id, p.created_at,
            f.id, f.profile_id, f.file_name, f.file_type, f.file_size, f.storage_ref, f.uploaded_at
     FROM publications p
     LEFT JOIN files f ON f.id = p.file_id";

const FILE_COLUMNS: &str = "id, profile_id, file_name, file_type, file_size, storage_ref, uploaded_at";

/// Newest first; the id breaks ties between rows created in the same second
const NEWEST_FIRST: &str = "ORDER BY p.created_at DESC, p.id DESC";

/// SQLite-backed implementation of `PublicationRepository`
pub struct SqlitePublicationRepository {
    db: Arc<DbManager>,
}

impl SqlitePublicationRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PublicationRepository for SqlitePublicationRepository {
    async fn create_with_file(
        &self,
        profile_id: i64,
        metadata: PaperMetadata,
        file: NewFile,
    ) -> DomainResult<StoredPaper> {
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin()?;
                let file_id = insert_file(&tx, profile_id, &file)?;
                tx.execute(
                    "INSERT INTO publications
                         (profile_id, title, authors, journal, year, publication_date, doi, url,
                          abstract, keywords, file_id, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                    params![
                        profile_id,
                        metadata.title,
                        metadata.authors,
                        metadata.journal,
                        metadata.year,
                        date_to_sql(metadata.publication_date),
                        metadata.doi,
                        metadata.url,
                        metadata.abstract_text,
                        metadata.keywords,
                        file_id,
                        now_ts(),
                    ],
                )?;
                let publication_id = tx.last_insert_rowid();
                let paper = select_paper(&tx, publication_id)?;
                tx.commit()?;

                info!(profile_id, publication_id, file_id, "paper stored");
                Ok(paper)
            })
            .await
    }

    async fn find_owned(&self, profile_id: i64, publication_id: i64) -> DomainResult<Option<StoredPaper>> {
        self.db
            .with_connection(move |conn| {
                Ok(conn.query_optional(
                    &format!("{PAPER_SELECT} WHERE p.id = ?1 AND p.profile_id = ?2"),
                    &[&publication_id, &profile_id],
                    map_paper_row,
                )?)
            })
            .await
    }

    async fn find_detail(&self, publication_id: i64) -> DomainResult<Option<PaperDetail>> {
        self.db
            .with_connection(move |conn| {
                let owner: Option<(i64, String, String)> = conn
                    .query_row(
                        "SELECT u.id, u.first_name, u.last_name
                         FROM publications p
                         JOIN profiles pr ON pr.id = p.profile_id
                         JOIN users u ON u.id = pr.user_id
                         WHERE p.id = ?1",
                        params![publication_id],
                        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                    )
                    .optional()?;
                let Some((owner_user_id, first, last)) = owner else {
                    return Ok(None);
                };

                let paper = select_paper(conn, publication_id)?;
                Ok(Some(PaperDetail {
                    publication: paper.publication,
                    file: paper.file,
                    owner_user_id,
                    owner_name: format!("{first} {last}"),
                }))
            })
            .await
    }

    async fn update(
        &self,
        profile_id: i64,
        publication_id: i64,
        metadata: PaperMetadata,
        new_file: Option<NewFile>,
    ) -> DomainResult<Option<PaperUpdate>> {
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin_immediate()?;
                let previous_file: Option<Option<i64>> = tx
                    .query_row(
                        "SELECT file_id FROM publications WHERE id = ?1 AND profile_id = ?2",
                        params![publication_id, profile_id],
                        |row| row.get(0),
                    )
                    .optional()?;
                let Some(previous_file) = previous_file else {
                    return Ok(None);
                };

                tx.execute(
                    "UPDATE publications
                     SET title = ?1, authors = ?2, journal = ?3, year = ?4, publication_date = ?5,
                         doi = ?6, url = ?7, abstract = ?8, keywords = ?9
                     WHERE id = ?10",
                    params![
                        metadata.title,
                        metadata.authors,
                        metadata.journal,
                        metadata.year,
                        date_to_sql(metadata.publication_date),
                        metadata.doi,
                        metadata.url,
                        metadata.abstract_text,
                        metadata.keywords,
                        publication_id,
                    ],
                )?;

                let mut replaced = None;
                if let Some(file) = new_file {
                    let file_id = insert_file(&tx, profile_id, &file)?;
                    tx.execute(
                        "UPDATE publications SET file_id = ?1 WHERE id = ?2",
                        params![file_id, publication_id],
                    )?;
                    if let Some(old_id) = previous_file {
                        replaced = delete_file_row(&tx, old_id)?;
                    }
                    debug!(publication_id, file_id, replaced = ?previous_file, "paper file replaced");
                }

                let paper = select_paper(&tx, publication_id)?;
                tx.commit()?;
                Ok(Some(PaperUpdate { paper, replaced }))
            })
            .await
    }

    async fn list_by_profile(&self, profile_id: i64, limit: Option<usize>) -> DomainResult<Vec<Publication>> {
        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));
        self.db
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "{PAPER_SELECT} WHERE p.profile_id = ?1 {NEWEST_FIRST} LIMIT ?2"
                ))?;
                let rows = stmt
                    .query_map(params![profile_id, limit], map_publication)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await
    }

    async fn list_with_files(&self, profile_id: i64) -> DomainResult<Vec<StoredPaper>> {
        self.db
            .with_connection(move |conn| {
                let mut stmt =
                    conn.prepare(&format!("{PAPER_SELECT} WHERE p.profile_id = ?1 {NEWEST_FIRST}"))?;
                let rows = stmt
                    .query_map(params![profile_id], map_paper_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await
    }

    async fn delete_owned(&self, profile_id: i64, publication_id: i64) -> DomainResult<Option<StoredPaper>> {
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin_immediate()?;
                let paper = tx
                    .query_row(
                        &format!("{PAPER_SELECT} WHERE p.id = ?1 AND p.profile_id = ?2"),
                        params![publication_id, profile_id],
                        map_paper_row,
                    )
                    .optional()?;
                let Some(paper) = paper else {
                    return Ok(None);
                };

                tx.execute("DELETE FROM publications WHERE id = ?1", params![publication_id])?;
                if let Some(file) = &paper.file {
                    delete_file_row(&tx, file.id)?;
                }
                tx.commit()?;

                info!(profile_id, publication_id, "paper deleted");
                Ok(Some(paper))
            })
            .await
    }

    async fn find_file(&self, file_id: i64) -> DomainResult<Option<FileRecord>> {
        self.db
            .with_connection(move |conn| {
                Ok(conn.query_optional(
                    &format!("SELECT {FILE_COLUMNS} FROM files WHERE id = ?1"),
                    &[&file_id],
                    |row| map_file_at(row, 0),
                )?)
            })
            .await
    }

    async fn delete_file(&self, profile_id: i64, file_id: i64) -> DomainResult<Option<FileRecord>> {
        self.db
            .with_connection(move |conn| {
                // The publications.file_id foreign key is ON DELETE SET NULL
                Ok(conn.query_optional(
                    &format!(
                        "DELETE FROM files WHERE id = ?1 AND profile_id = ?2 RETURNING {FILE_COLUMNS}"
                    ),
                    &[&file_id, &profile_id],
                    |row| map_file_at(row, 0),
                )?)
            })
            .await
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn insert_file(conn: &Connection, profile_id: i64, file: &NewFile) -> InfraResult<i64> {
    conn.execute(
        "INSERT INTO files (profile_id, file_name, file_type, file_size, storage_ref, uploaded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![profile_id, file.file_name, file.file_type, file.file_size, file.storage_ref, now_ts()],
    )?;
    Ok(conn.last_insert_rowid())
}

fn delete_file_row(conn: &Connection, file_id: i64) -> InfraResult<Option<FileRecord>> {
    Ok(conn
        .query_row(
            &format!("DELETE FROM files WHERE id = ?1 RETURNING {FILE_COLUMNS}"),
            params![file_id],
            |row| map_file_at(row, 0),
        )
        .optional()?)
}

fn select_paper(conn: &Connection, publication_id: i64) -> rusqlite::Result<StoredPaper> {
    conn.query_row(&format!("{PAPER_SELECT} WHERE p.id = ?1"), params![publication_id], map_paper_row)
}

fn map_publication(row: &Row<'_>) -> rusqlite::Result<Publication> {
    Ok(Publication {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        title: row.get(2)?,
        authors: row.get(3)?,
        journal: row.get(4)?,
        year: row.get(5)?,
        publication_date: date_at(row, 6)?,
        doi: row.get(7)?,
        url: row.get(8)?,
        abstract_text: row.get(9)?,
        keywords: row.get(10)?,
        file_id: row.get(11)?,
        created_at: timestamp_at(row, 12)?,
    })
}

fn map_file_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<FileRecord> {
    Ok(FileRecord {
        id: row.get(offset)?,
        profile_id: row.get(offset + 1)?,
        file_name: row.get(offset + 2)?,
        file_type: row.get(offset + 3)?,
        file_size: row.get(offset + 4)?,
        storage_ref: row.get(offset + 5)?,
        uploaded_at: timestamp_at(row, offset + 6)?,
    })
}

fn map_paper_row(row: &Row<'_>) -> rusqlite::Result<StoredPaper> {
    let file_id: Option<i64> = row.get(13)?;
    Ok(StoredPaper {
        publication: map_publication(row)?,
        file: file_id.map(|_| map_file_at(row, 13)).transpose()?,
    })
}
