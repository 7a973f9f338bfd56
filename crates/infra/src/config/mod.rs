//! Configuration loading
//!
//! `RESEARCHD_*` environment variables win when `RESEARCHD_DB_PATH` is set;
//! otherwise the first `config.{json,toml}` or `researchd.{json,toml}` found
//! is used, and built-in defaults apply when there is none.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
