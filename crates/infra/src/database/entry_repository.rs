//! Education, experience and ordered-child repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use researchd_core::profile::ports::EntryRepository;
use researchd_domain::{
    Achievement, AchievementType, ChildKind, ChildRecord, Education, Experience, ExternalRole,
    NewChild, NewEducation, NewExperience, Result as DomainResult,
};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use tracing::debug;

use super::manager::DbManager;

const EDUCATION_COLUMNS: &str = "id, profile_id, degree, institution, start_year, end_year";
const EXPERIENCE_COLUMNS: &str = "id, profile_id, role, institution, start_year, end_year";
const ACHIEVEMENT_COLUMNS: &str = "id, profile_id, title, description, year, type, sort_order";
const EXTERNAL_ROLE_COLUMNS: &str =
    "id, profile_id, role_title, organization, start_year, end_year, description, sort_order";

/// Dated entries: newest start year first, undated last
const BY_START_YEAR: &str = "ORDER BY start_year IS NULL, start_year DESC, id";
/// Ordered children: explicit position first, unpositioned last
const BY_SORT_ORDER: &str = "ORDER BY sort_order IS NULL, sort_order, id";

/// SQLite-backed implementation of `EntryRepository`
pub struct SqliteEntryRepository {
    db: Arc<DbManager>,
}

impl SqliteEntryRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for SqliteEntryRepository {
    async fn list_educations(&self, profile_id: i64) -> DomainResult<Vec<Education>> {
        self.db
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {EDUCATION_COLUMNS} FROM educations WHERE profile_id = ?1 {BY_START_YEAR}"
                ))?;
                let rows = stmt
                    .query_map(params![profile_id], map_education_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await
    }

    async fn list_experiences(&self, profile_id: i64) -> DomainResult<Vec<Experience>> {
        self.db
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE profile_id = ?1 {BY_START_YEAR}"
                ))?;
                let rows = stmt
                    .query_map(params![profile_id], map_experience_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await
    }

    async fn add_education(&self, profile_id: i64, entry: NewEducation) -> DomainResult<Education> {
        self.db
            .with_connection(move |conn| {
                let education = conn.query_row(
                    &format!(
                        "INSERT INTO educations (profile_id, degree, institution, start_year, end_year)
                         VALUES (?1, ?2, ?3, ?4, ?5)
                         RETURNING {EDUCATION_COLUMNS}"
                    ),
                    params![profile_id, entry.degree, entry.institution, entry.start_year, entry.end_year],
                    map_education_row,
                )?;
                debug!(profile_id, education_id = education.id, "education inserted");
                Ok(education)
            })
            .await
    }

    async fn add_experience(&self, profile_id: i64, entry: NewExperience) -> DomainResult<Experience> {
        self.db
            .with_connection(move |conn| {
                let experience = conn.query_row(
                    &format!(
                        "INSERT INTO experiences (profile_id, role, institution, start_year, end_year)
                         VALUES (?1, ?2, ?3, ?4, ?5)
                         RETURNING {EXPERIENCE_COLUMNS}"
                    ),
                    params![profile_id, entry.role, entry.institution, entry.start_year, entry.end_year],
                    map_experience_row,
                )?;
                debug!(profile_id, experience_id = experience.id, "experience inserted");
                Ok(experience)
            })
            .await
    }

    async fn delete_education(&self, profile_id: i64, id: i64) -> DomainResult<bool> {
        self.db
            .with_connection(move |conn| {
                let deleted = conn.execute(
                    "DELETE FROM educations WHERE id = ?1 AND profile_id = ?2",
                    params![id, profile_id],
                )?;
                Ok(deleted > 0)
            })
            .await
    }

    async fn delete_experience(&self, profile_id: i64, id: i64) -> DomainResult<bool> {
        self.db
            .with_connection(move |conn| {
                let deleted = conn.execute(
                    "DELETE FROM experiences WHERE id = ?1 AND profile_id = ?2",
                    params![id, profile_id],
                )?;
                Ok(deleted > 0)
            })
            .await
    }

    async fn list_children(&self, profile_id: i64, kind: ChildKind) -> DomainResult<Vec<ChildRecord>> {
        self.db
            .with_connection(move |conn| {
                let records = match kind {
                    ChildKind::Achievement => {
                        let mut stmt = conn.prepare(&format!(
                            "SELECT {ACHIEVEMENT_COLUMNS} FROM achievements WHERE profile_id = ?1 {BY_SORT_ORDER}"
                        ))?;
                        let rows = stmt
                            .query_map(params![profile_id], |row| {
                                map_achievement_row(row).map(ChildRecord::Achievement)
                            })?
                            .collect::<rusqlite::Result<Vec<_>>>()?;
                        rows
                    }
                    ChildKind::ExternalRole => {
                        let mut stmt = conn.prepare(&format!(
                            "SELECT {EXTERNAL_ROLE_COLUMNS} FROM external_roles WHERE profile_id = ?1 {BY_SORT_ORDER}"
                        ))?;
                        let rows = stmt
                            .query_map(params![profile_id], |row| {
                                map_external_role_row(row).map(ChildRecord::ExternalRole)
                            })?
                            .collect::<rusqlite::Result<Vec<_>>>()?;
                        rows
                    }
                };
                Ok(records)
            })
            .await
    }

    async fn add_child(&self, profile_id: i64, child: NewChild) -> DomainResult<ChildRecord> {
        self.db
            .with_connection(move |conn| {
                // Write lock held across the MAX read and the insert
                let tx = conn.begin_immediate()?;
                let table = table_for(child.kind());
                let next: i64 = tx.query_row(
                    &format!("SELECT COALESCE(MAX(sort_order), 0) + 1 FROM {table} WHERE profile_id = ?1"),
                    params![profile_id],
                    |row| row.get(0),
                )?;

                let record = match child {
                    NewChild::Achievement(a) => ChildRecord::Achievement(tx.query_row(
                        &format!(
                            "INSERT INTO achievements (profile_id, title, description, year, type, sort_order)
                             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                             RETURNING {ACHIEVEMENT_COLUMNS}"
                        ),
                        params![profile_id, a.title, a.description, a.year, a.kind.as_str(), next],
                        map_achievement_row,
                    )?),
                    NewChild::ExternalRole(r) => ChildRecord::ExternalRole(tx.query_row(
                        &format!(
                            "INSERT INTO external_roles
                                 (profile_id, role_title, organization, start_year, end_year, description, sort_order)
                             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                             RETURNING {EXTERNAL_ROLE_COLUMNS}"
                        ),
                        params![
                            profile_id,
                            r.role_title,
                            r.organization,
                            r.start_year,
                            r.end_year,
                            r.description,
                            next,
                        ],
                        map_external_role_row,
                    )?),
                };
                tx.commit()?;

                debug!(profile_id, kind = %record.kind(), id = record.id(), sort_order = next, "child inserted");
                Ok(record)
            })
            .await
    }

    async fn delete_child(&self, profile_id: i64, kind: ChildKind, id: i64) -> DomainResult<bool> {
        self.db
            .with_connection(move |conn| {
                let table = table_for(kind);
                let deleted = conn.execute(
                    &format!("DELETE FROM {table} WHERE id = ?1 AND profile_id = ?2"),
                    params![id, profile_id],
                )?;
                Ok(deleted > 0)
            })
            .await
    }

    async fn reorder_children(
        &self,
        profile_id: i64,
        kind: ChildKind,
        ordered_ids: &[i64],
    ) -> DomainResult<usize> {
        let ordered_ids = ordered_ids.to_vec();
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin()?;
                let table = table_for(kind);
                let mut updated = 0;
                {
                    let mut stmt = tx.prepare(&format!(
                        "UPDATE {table} SET sort_order = ?1 WHERE id = ?2 AND profile_id = ?3"
                    ))?;
                    for (index, id) in ordered_ids.iter().enumerate() {
                        let position = i64::try_from(index).unwrap_or(i64::MAX - 1) + 1;
                        updated += stmt.execute(params![position, id, profile_id])?;
                    }
                }
                tx.commit()?;
                Ok(updated)
            })
            .await
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn table_for(kind: ChildKind) -> &'static str {
    match kind {
        ChildKind::Achievement => "achievements",
        ChildKind::ExternalRole => "external_roles",
    }
}

fn map_education_row(row: &Row<'_>) -> rusqlite::Result<Education> {
    Ok(Education {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        degree: row.get(2)?,
        institution: row.get(3)?,
        start_year: row.get(4)?,
        end_year: row.get(5)?,
    })
}

fn map_experience_row(row: &Row<'_>) -> rusqlite::Result<Experience> {
    Ok(Experience {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        role: row.get(2)?,
        institution: row.get(3)?,
        start_year: row.get(4)?,
        end_year: row.get(5)?,
    })
}

fn map_achievement_row(row: &Row<'_>) -> rusqlite::Result<Achievement> {
    let kind: String = row.get(5)?;
    let kind = kind
        .parse::<AchievementType>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, e.into()))?;
    Ok(Achievement {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        year: row.get(4)?,
        kind,
        sort_order: row.get(6)?,
    })
}

fn map_external_role_row(row: &Row<'_>) -> rusqlite::Result<ExternalRole> {
    Ok(ExternalRole {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        role_title: row.get(2)?,
        organization: row.get(3)?,
        start_year: row.get(4)?,
        end_year: row.get(5)?,
        description: row.get(6)?,
        sort_order: row.get(7)?,
    })
}
