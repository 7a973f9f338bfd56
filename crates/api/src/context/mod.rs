//! Application context - dependency injection container

use std::sync::Arc;

use researchd_core::{AccountService, DirectoryService, PaperService, PasswordHasher, ProfileService};
use researchd_domain::{Config, ResearchdError, Result};
use researchd_infra::{
    Argon2PasswordHasher, DbManager, FsBlobStore, SqliteDirectoryRepository,
    SqliteEntryRepository, SqliteProfileRepository, SqlitePublicationRepository,
    SqliteUserRepository,
};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub blobs: Arc<FsBlobStore>,
    pub hasher: Arc<dyn PasswordHasher>,

    // Core services
    pub accounts: Arc<AccountService>,
    pub profiles: Arc<ProfileService>,
    pub papers: Arc<PaperService>,
    pub directory: Arc<DirectoryService>,
}

impl AppContext {
    /// Load configuration from the environment or a config file and build
    /// the context from it.
    pub async fn new() -> Result<Self> {
        let config = researchd_infra::config::load()?;
        Self::new_with_config(config).await
    }

    /// Build the context from an explicit configuration.
    ///
    /// Opens the pool, applies the schema, creates the blob root and wires
    /// every repository into its service.
    pub async fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_hasher(config, Arc::new(Argon2PasswordHasher::new())).await
    }

    /// Same as [`AppContext::new_with_config`] with a caller-supplied
    /// password hasher.
    pub async fn new_with_hasher(config: Config, hasher: Arc<dyn PasswordHasher>) -> Result<Self> {
        if let Some(parent) = config.database.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ResearchdError::Config(format!(
                    "cannot create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let db = Arc::new(DbManager::from_config(&config.database)?);
        let migrations = Arc::clone(&db);
        tokio::task::spawn_blocking(move || migrations.run_migrations())
            .await
            .map_err(|e| ResearchdError::Internal(format!("migration task failed: {e}")))??;

        let blobs = Arc::new(FsBlobStore::new(&config.storage.root).await?);
        let max_upload_bytes = config.storage.max_upload_bytes;

        let users = Arc::new(SqliteUserRepository::new(Arc::clone(&db)));
        let profile_repository = Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));
        let entries = Arc::new(SqliteEntryRepository::new(Arc::clone(&db)));
        let publications = Arc::new(SqlitePublicationRepository::new(Arc::clone(&db)));
        let directory_repository = Arc::new(SqliteDirectoryRepository::new(Arc::clone(&db)));

        let accounts = Arc::new(AccountService::new(users.clone(), Arc::clone(&hasher)));
        let profiles = Arc::new(ProfileService::new(
            users,
            profile_repository.clone(),
            entries,
            publications.clone(),
            blobs.clone(),
            max_upload_bytes,
        ));
        let papers = Arc::new(PaperService::new(
            profile_repository,
            publications,
            blobs.clone(),
            max_upload_bytes,
        ));
        let directory =
            Arc::new(DirectoryService::new(directory_repository, config.search.clone()));

        info!(
            db_path = %db.path().display(),
            storage_root = %blobs.root().display(),
            "application context initialised"
        );

        Ok(Self { config, db, blobs, hasher, accounts, profiles, papers, directory })
    }

    /// Run component health checks and compute the overall score.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new();

        status = status.add_component(self.check_database_health().await);
        status = status.add_component(self.check_storage_health().await);

        status.calculate_score();
        status
    }

    /// Check database health with a pooled `SELECT 1`
    ///
    /// Runs on the blocking pool since the query is synchronous.
    async fn check_database_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);
        match tokio::task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("database"),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "database health check failed");
                ComponentHealth::unhealthy("database", format!("query failed: {e}"))
            }
            Err(e) => {
                tracing::error!(error = %e, "database health check task panicked");
                ComponentHealth::unhealthy("database", format!("task panic: {e}"))
            }
        }
    }

    /// The blob root must still exist and be a directory
    async fn check_storage_health(&self) -> ComponentHealth {
        match tokio::fs::metadata(self.blobs.root()).await {
            Ok(meta) if meta.is_dir() => ComponentHealth::healthy("blob_store"),
            Ok(_) => ComponentHealth::unhealthy("blob_store", "storage root is not a directory"),
            Err(e) => {
                tracing::warn!(error = %e, "blob store health check failed");
                ComponentHealth::unhealthy("blob_store", format!("storage root unavailable: {e}"))
            }
        }
    }
}
