//! Shared harness for infra integration tests: a migrated temporary SQLite
//! database and a blob root, wired into the core services.

#![allow(dead_code)]

use std::sync::Arc;

use researchd_core::account::ports::PasswordHasher;
use researchd_core::{AccountService, DirectoryService, PaperService, ProfileService};
use researchd_domain::{Registration, Result, SearchConfig, User};
use researchd_infra::database::{
    DbManager, SqliteDirectoryRepository, SqliteEntryRepository, SqliteProfileRepository,
    SqlitePublicationRepository, SqliteUserRepository,
};
use researchd_infra::storage::FsBlobStore;
use tempfile::TempDir;

pub const MAX_UPLOAD_BYTES: u64 = 64 * 1024;
pub const PDF_BYTES: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n";

/// Cheap reversible hasher; Argon2 has its own unit tests
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(format!("plain${password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(hash == format!("plain${password}"))
    }
}

/// Temporary database wrapper that keeps the underlying files alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    pub temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager = DbManager::new(temp_dir.path().join("researchd-test.db"), 4)
            .expect("db manager should be created");
        manager.run_migrations().expect("schema should apply");
        Self { manager: Arc::new(manager), temp_dir }
    }

    /// Execute a batch of SQL statements against the database.
    pub fn execute_batch(&self, sql: &str) {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.execute_batch(sql).expect("SQL batch execution should succeed");
    }

    /// Single integer query, for row counts
    pub fn count(&self, sql: &str) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row(sql, [], |row| row.get(0)).expect("count query should succeed")
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Every service wired to SQLite and a filesystem blob store
pub struct Stack {
    pub db: TestDatabase,
    pub blobs: Arc<FsBlobStore>,
    pub accounts: AccountService,
    pub profiles: ProfileService,
    pub papers: PaperService,
    pub directory: DirectoryService,
}

impl Stack {
    pub async fn new() -> Self {
        let db = TestDatabase::new();
        let blobs = Arc::new(
            FsBlobStore::new(db.temp_dir.path().join("uploads")).await.expect("blob store"),
        );
        let manager = Arc::clone(&db.manager);

        let users = Arc::new(SqliteUserRepository::new(Arc::clone(&manager)));
        let profiles = Arc::new(SqliteProfileRepository::new(Arc::clone(&manager)));
        let entries = Arc::new(SqliteEntryRepository::new(Arc::clone(&manager)));
        let publications = Arc::new(SqlitePublicationRepository::new(Arc::clone(&manager)));
        let directory = Arc::new(SqliteDirectoryRepository::new(Arc::clone(&manager)));

        Self {
            accounts: AccountService::new(users.clone(), Arc::new(PlainHasher)),
            profiles: ProfileService::new(
                users,
                profiles.clone(),
                entries,
                publications.clone(),
                blobs.clone(),
                MAX_UPLOAD_BYTES,
            ),
            papers: PaperService::new(profiles, publications, blobs.clone(), MAX_UPLOAD_BYTES),
            directory: DirectoryService::new(directory, SearchConfig::default()),
            blobs,
            db,
        }
    }

    pub async fn register(&self, first: &str, last: &str, email: &str) -> User {
        self.accounts
            .register(Registration {
                email: email.to_string(),
                password: "password123".to_string(),
                confirm_password: "password123".to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                ..Default::default()
            })
            .await
            .expect("registration should succeed")
    }
}
