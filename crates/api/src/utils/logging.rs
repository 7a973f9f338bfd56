//! Structured logging for commands and the process-wide subscriber

use std::time::Duration;

use researchd_domain::ResearchdError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable switching the subscriber to JSON lines
pub const LOG_JSON_ENV: &str = "RESEARCHD_LOG_JSON";

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"papers::upload_paper"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - Stable error label when the command failed, see [`error_label`].
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&'static str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Convert a `ResearchdError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ResearchdError) -> &'static str {
    match error {
        ResearchdError::Validation(_) => "validation",
        ResearchdError::NotFound(_) => "not_found",
        ResearchdError::AccessDenied(_) => "access_denied",
        ResearchdError::Storage(_) => "storage",
        ResearchdError::Conflict(_) => "conflict",
        ResearchdError::Database(_) => "database",
        ResearchdError::Config(_) => "config",
        ResearchdError::Internal(_) => "internal",
    }
}

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Setting
/// `RESEARCHD_LOG_JSON` to anything but `0`/`false` switches to JSON lines.
/// Calling this twice is harmless; the second install is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = if json_logs_requested(std::env::var(LOG_JSON_ENV).ok().as_deref()) {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn json_logs_requested(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !(v == "0" || v.eq_ignore_ascii_case("false")),
    }
}
