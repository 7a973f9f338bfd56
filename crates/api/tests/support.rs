//! Shared harness for command tests: an `AppContext` over a temporary
//! database and blob root.

#![allow(dead_code)]

use std::sync::Arc;

use researchd_core::PasswordHasher;
use researchd_domain::{Config, DatabaseConfig, Registration, Result, StorageConfig, User};
use researchd_lib::{register, AppContext};
use tempfile::TempDir;

pub const MAX_UPLOAD_BYTES: u64 = 64 * 1024;
pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n%demo\n";
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

/// Reversible hasher so tests don't pay for Argon2
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(format!("plain${password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(hash == format!("plain${password}"))
    }
}

pub fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        database: DatabaseConfig { path: temp_dir.path().join("data/researchd.db"), pool_size: 4 },
        storage: StorageConfig {
            root: temp_dir.path().join("uploads"),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        },
        ..Config::default()
    }
}

/// Context plus the temp dir that must outlive it
pub struct TestApp {
    pub ctx: AppContext,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let ctx = AppContext::new_with_hasher(test_config(&temp_dir), Arc::new(PlainHasher))
            .await
            .expect("context should initialise");
        Self { ctx, temp_dir }
    }

    pub async fn register(&self, first: &str, last: &str, email: &str) -> User {
        register(
            &self.ctx,
            Registration {
                email: email.to_string(),
                password: "password123".to_string(),
                confirm_password: "password123".to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("registration should succeed")
    }

    /// Run raw SQL against the context's database
    pub fn execute_batch(&self, sql: &str) {
        let conn = self.ctx.db.get_connection().expect("connection should be available");
        conn.execute_batch(sql).expect("SQL batch execution should succeed");
    }

    pub fn count(&self, sql: &str) -> i64 {
        let conn = self.ctx.db.get_connection().expect("connection should be available");
        conn.query_row(sql, [], |row| row.get(0)).expect("count query should succeed")
    }
}
