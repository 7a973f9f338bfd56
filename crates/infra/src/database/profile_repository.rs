//! Profile, social link and photo repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use researchd_common::storage::SqliteConnection;
use researchd_core::profile::ports::{ProfileChanges, ProfileRepository};
use researchd_domain::{Photo, Profile, ResearchdError, Result as DomainResult, Social};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use super::manager::DbManager;
use super::rows::{now_ts, timestamp_at};
use crate::errors::InfraResult;

const PROFILE_COLUMNS: &str = "id, user_id, title, institution, department, position, bio, \
     location, profile_picture, research_interests, section_order";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn get_or_create(&self, user_id: i64) -> DomainResult<Profile> {
        self.db.with_connection(move |conn| get_or_create_profile(conn, user_id)).await
    }

    async fn find_by_user(&self, user_id: i64) -> DomainResult<Option<Profile>> {
        self.db
            .with_connection(move |conn| {
                Ok(conn.query_optional(
                    &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
                    &[&user_id],
                    map_profile_row,
                )?)
            })
            .await
    }

    async fn apply_changes(&self, user_id: i64, changes: ProfileChanges) -> DomainResult<Profile> {
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin()?;

                let updated = tx.execute(
                    "UPDATE users SET first_name = ?1, last_name = ?2 WHERE id = ?3",
                    params![changes.first_name, changes.last_name, user_id],
                )?;
                if updated == 0 {
                    return Err(ResearchdError::not_found("user", user_id).into());
                }

                tx.execute(
                    "INSERT OR IGNORE INTO profiles (user_id) VALUES (?1)",
                    params![user_id],
                )?;
                let fields = &changes.fields;
                tx.execute(
                    "UPDATE profiles
                     SET title = ?1, institution = ?2, department = ?3, position = ?4,
                         bio = ?5, location = ?6
                     WHERE user_id = ?7",
                    params![
                        fields.title,
                        fields.institution,
                        fields.department,
                        fields.position,
                        fields.bio,
                        fields.location,
                        user_id,
                    ],
                )?;
                let profile = select_profile(&tx, user_id)?;

                for (platform, url) in &changes.socials {
                    match url {
                        Some(url) => {
                            tx.execute(
                                "INSERT INTO socials (profile_id, platform, url) VALUES (?1, ?2, ?3)
                                 ON CONFLICT(profile_id, platform) DO UPDATE SET url = excluded.url",
                                params![profile.id, platform.as_str(), url],
                            )?;
                        }
                        None => {
                            tx.execute(
                                "DELETE FROM socials WHERE profile_id = ?1 AND platform = ?2",
                                params![profile.id, platform.as_str()],
                            )?;
                        }
                    }
                }

                tx.commit()?;
                Ok(profile)
            })
            .await
    }

    async fn set_research_interests(&self, profile_id: i64, raw: &str) -> DomainResult<()> {
        let raw = raw.to_string();
        self.db
            .with_connection(move |conn| {
                update_profile_column(conn, profile_id, "research_interests", Some(raw))
            })
            .await
    }

    async fn set_section_order(&self, profile_id: i64, json: &str) -> DomainResult<()> {
        let json = json.to_string();
        self.db
            .with_connection(move |conn| {
                update_profile_column(conn, profile_id, "section_order", Some(json))
            })
            .await
    }

    async fn set_profile_picture(
        &self,
        profile_id: i64,
        reference: Option<String>,
    ) -> DomainResult<Option<String>> {
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin_immediate()?;
                let previous: Option<String> = tx
                    .query_row(
                        "SELECT profile_picture FROM profiles WHERE id = ?1",
                        params![profile_id],
                        |row| row.get(0),
                    )
                    .optional()?
                    .ok_or_else(|| ResearchdError::not_found("profile", profile_id))?;
                tx.execute(
                    "UPDATE profiles SET profile_picture = ?1 WHERE id = ?2",
                    params![reference, profile_id],
                )?;
                tx.commit()?;
                Ok(previous)
            })
            .await
    }

    async fn delete_profile(&self, profile_id: i64) -> DomainResult<Vec<String>> {
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin_immediate()?;

                let mut references: Vec<String> = tx
                    .query_row(
                        "SELECT profile_picture FROM profiles WHERE id = ?1",
                        params![profile_id],
                        |row| row.get::<_, Option<String>>(0),
                    )
                    .optional()?
                    .ok_or_else(|| ResearchdError::not_found("profile", profile_id))?
                    .into_iter()
                    .collect();

                {
                    let mut stmt = tx.prepare(
                        "SELECT storage_ref FROM files WHERE profile_id = ?1
                         UNION ALL
                         SELECT storage_ref FROM photos WHERE profile_id = ?1",
                    )?;
                    let rows = stmt.query_map(params![profile_id], |row| row.get::<_, String>(0))?;
                    for reference in rows {
                        references.push(reference?);
                    }
                }

                tx.execute("DELETE FROM profiles WHERE id = ?1", params![profile_id])?;
                tx.commit()?;

                info!(profile_id, blobs = references.len(), "profile rows deleted");
                Ok(references)
            })
            .await
    }

    async fn list_socials(&self, profile_id: i64) -> DomainResult<Vec<Social>> {
        self.db
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, profile_id, platform, url FROM socials
                     WHERE profile_id = ?1 ORDER BY platform, id",
                )?;
                let socials = stmt
                    .query_map(params![profile_id], |row| {
                        Ok(Social {
                            id: row.get(0)?,
                            profile_id: row.get(1)?,
                            platform: row.get(2)?,
                            url: row.get(3)?,
                        })
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(socials)
            })
            .await
    }

    async fn list_photos(&self, profile_id: i64) -> DomainResult<Vec<Photo>> {
        self.db
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, profile_id, storage_ref, caption, uploaded_at FROM photos
                     WHERE profile_id = ?1 ORDER BY uploaded_at DESC, id DESC",
                )?;
                let photos = stmt
                    .query_map(params![profile_id], map_photo_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(photos)
            })
            .await
    }

    async fn add_photo(
        &self,
        profile_id: i64,
        reference: String,
        caption: Option<String>,
    ) -> DomainResult<Photo> {
        self.db
            .with_connection(move |conn| {
                let photo = conn.query_row(
                    "INSERT INTO photos (profile_id, storage_ref, caption, uploaded_at)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING id, profile_id, storage_ref, caption, uploaded_at",
                    params![profile_id, reference, caption, now_ts()],
                    map_photo_row,
                )?;
                debug!(profile_id, photo_id = photo.id, "photo inserted");
                Ok(photo)
            })
            .await
    }

    async fn delete_photo(&self, profile_id: i64, photo_id: i64) -> DomainResult<Option<Photo>> {
        self.db
            .with_connection(move |conn| {
                Ok(conn.query_optional(
                    "DELETE FROM photos WHERE id = ?1 AND profile_id = ?2
                     RETURNING id, profile_id, storage_ref, caption, uploaded_at",
                    &[&photo_id, &profile_id],
                    map_photo_row,
                )?)
            })
            .await
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Insert-or-ignore then read, so concurrent first calls converge on one row.
fn get_or_create_profile(conn: &mut SqliteConnection, user_id: i64) -> InfraResult<Profile> {
    let tx = conn.begin_immediate()?;

    let user_exists: Option<i64> = tx
        .query_row("SELECT 1 FROM users WHERE id = ?1", params![user_id], |row| row.get(0))
        .optional()?;
    if user_exists.is_none() {
        return Err(ResearchdError::not_found("user", user_id).into());
    }

    let inserted = tx.execute("INSERT OR IGNORE INTO profiles (user_id) VALUES (?1)", params![user_id])?;
    let profile = select_profile(&tx, user_id)?;
    tx.commit()?;

    if inserted > 0 {
        info!(user_id, profile_id = profile.id, "profile created on first access");
    }
    Ok(profile)
}

fn select_profile(conn: &Connection, user_id: i64) -> rusqlite::Result<Profile> {
    conn.query_row(
        &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
        params![user_id],
        map_profile_row,
    )
}

/// `column` is always one of the fixed names used by this module
fn update_profile_column(
    conn: &SqliteConnection,
    profile_id: i64,
    column: &'static str,
    value: Option<String>,
) -> InfraResult<()> {
    let updated = conn.execute(
        &format!("UPDATE profiles SET {column} = ?1 WHERE id = ?2"),
        params![value, profile_id],
    )?;
    if updated == 0 {
        return Err(ResearchdError::not_found("profile", profile_id).into());
    }
    Ok(())
}

/// Map a row to a Profile
fn map_profile_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        institution: row.get(3)?,
        department: row.get(4)?,
        position: row.get(5)?,
        bio: row.get(6)?,
        location: row.get(7)?,
        profile_picture: row.get(8)?,
        research_interests: row.get(9)?,
        section_order: row.get(10)?,
    })
}

fn map_photo_row(row: &Row<'_>) -> rusqlite::Result<Photo> {
    Ok(Photo {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        storage_ref: row.get(2)?,
        caption: row.get(3)?,
        uploaded_at: timestamp_at(row, 4)?,
    })
}
