//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `RESEARCHD_DB_PATH` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, the built-in defaults apply
//!
//! ## Environment Variables
//! - `RESEARCHD_DB_PATH`: Database file path (required for env loading)
//! - `RESEARCHD_DB_POOL_SIZE`: Connection pool size
//! - `RESEARCHD_STORAGE_ROOT`: Directory for uploaded blobs
//! - `RESEARCHD_MAX_UPLOAD_BYTES`: Upload size cap
//! - `RESEARCHD_PAGE_SIZE`: Default directory page size
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./researchd.json` or `./researchd.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use researchd_domain::{Config, ResearchdError, Result};

const CONFIG_FILE_NAMES: &[&str] = &["config.json", "config.toml", "researchd.json", "researchd.toml"];

/// Load configuration with automatic fallback strategy
///
/// Environment first, then the first config file found, then defaults.
///
/// # Errors
/// Returns `ResearchdError::Config` if an environment value or a found
/// file is invalid.
pub fn load() -> Result<Config> {
    if std::env::var_os("RESEARCHD_DB_PATH").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found; using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `RESEARCHD_DB_PATH` must be set; the other variables are optional and
/// default to [`Config::default`] values.
///
/// # Errors
/// Returns `ResearchdError::Config` if the path is missing or a numeric
/// value does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.database.path = PathBuf::from(env_var("RESEARCHD_DB_PATH")?);
    if let Some(size) = env_parse::<u32>("RESEARCHD_DB_POOL_SIZE", "pool size")? {
        config.database.pool_size = size;
    }
    if let Ok(root) = std::env::var("RESEARCHD_STORAGE_ROOT") {
        config.storage.root = PathBuf::from(root);
    }
    if let Some(bytes) = env_parse::<u64>("RESEARCHD_MAX_UPLOAD_BYTES", "max upload bytes")? {
        config.storage.max_upload_bytes = bytes;
    }
    if let Some(page_size) = env_parse::<i64>("RESEARCHD_PAGE_SIZE", "page size")? {
        config.search.default_page_size = page_size;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and keys missing from the file keep their defaults.
///
/// # Errors
/// Returns `ResearchdError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ResearchdError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ResearchdError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ResearchdError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ResearchdError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ResearchdError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ResearchdError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, then the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ResearchdError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ResearchdError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional numeric environment variable
fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ResearchdError::Config(format!("Invalid {what}: {e}"))),
        Err(_) => Ok(None),
    }
}
