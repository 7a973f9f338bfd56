//! User account repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use researchd_core::account::ports::UserRepository;
use researchd_domain::{NewUser, ProfileFields, ResearchdError, Result as DomainResult, User};
use rusqlite::{params, Row};
use tracing::debug;

use super::manager::DbManager;
use super::rows::{bool_at, now_ts, timestamp_at};
use crate::errors::InfraError;

const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, is_active, created_at";

/// SQLite-backed implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_with_profile(&self, user: NewUser, profile: ProfileFields) -> DomainResult<User> {
        self.db
            .with_connection(move |conn| {
                let tx = conn.begin()?;
                let created_at = now_ts();

                tx.execute(
                    "INSERT INTO users (email, password_hash, first_name, last_name, is_active, created_at)
                     VALUES (?1, ?2, ?3, ?4, 1, ?5)",
                    params![user.email, user.password_hash, user.first_name, user.last_name, created_at],
                )
                .map_err(|err| match InfraError::from(err) {
                    InfraError(ResearchdError::Conflict(_)) => InfraError(ResearchdError::Conflict(
                        "Email already registered. Please login.".into(),
                    )),
                    other => other,
                })?;
                let user_id = tx.last_insert_rowid();

                tx.execute(
                    "INSERT INTO profiles (user_id, title, institution, position, department, bio, location)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        user_id,
                        profile.title,
                        profile.institution,
                        profile.position,
                        profile.department,
                        profile.bio,
                        profile.location,
                    ],
                )?;

                let record = tx.query_row(
                    &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                    params![user_id],
                    map_user_row,
                )?;
                tx.commit()?;

                debug!(user_id, "user and profile inserted");
                Ok(record)
            })
            .await
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        self.db
            .with_connection(move |conn| {
                Ok(conn.query_optional(
                    &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                    &[&id],
                    map_user_row,
                )?)
            })
            .await
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let email = email.to_string();
        self.db
            .with_connection(move |conn| {
                Ok(conn.query_optional(
                    &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1 COLLATE NOCASE"),
                    &[&email],
                    map_user_row,
                )?)
            })
            .await
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a User
fn map_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        is_active: bool_at(row, 5)?,
        created_at: timestamp_at(row, 6)?,
    })
}
