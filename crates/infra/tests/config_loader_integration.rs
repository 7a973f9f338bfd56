//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::path::PathBuf;

use researchd_domain::Config;
use researchd_infra::config;
use tempfile::{Builder, TempDir};

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "database": { "path": "/tmp/integration_test.db", "pool_size": 6 },
        "storage": { "root": "/tmp/researchd-uploads", "max_upload_bytes": 2048 },
        "search": { "default_page_size": 20, "max_page_size": 40 }
    }"#;

    let mut file = Builder::new().suffix(".json").tempfile().expect("Failed to create temp file");
    file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("json config");

    assert_eq!(config.database.path, PathBuf::from("/tmp/integration_test.db"));
    assert_eq!(config.database.pool_size, 6);
    assert_eq!(config.storage.root, PathBuf::from("/tmp/researchd-uploads"));
    assert_eq!(config.storage.max_upload_bytes, 2048);
    assert_eq!(config.search.default_page_size, 20);
    assert_eq!(config.search.max_page_size, 40);
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[database]
path = "researchd.db"
pool_size = 3

[storage]
root = "blobs"
"#;

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("researchd.toml");
    std::fs::write(&path, toml_content).expect("write toml");

    let config = config::load_from_file(Some(path)).expect("toml config");
    assert_eq!(config.database.pool_size, 3);
    assert_eq!(config.storage.root, PathBuf::from("blobs"));
    assert_eq!(config.storage.max_upload_bytes, Config::default().storage.max_upload_bytes);
    assert_eq!(config.search, Config::default().search);
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = Builder::new().suffix(".toml").tempfile().expect("temp file");
    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("empty toml");
    assert_eq!(config, Config::default());
}

#[test]
fn test_wrong_value_type_is_config_error() {
    let mut file = Builder::new().suffix(".json").tempfile().expect("temp file");
    write!(file, r#"{{"database": {{"pool_size": "many"}}}}"#).expect("write");

    let err = config::load_from_file(Some(file.path().to_path_buf())).expect_err("bad type");
    assert!(matches!(err, researchd_domain::ResearchdError::Config(_)));
}
