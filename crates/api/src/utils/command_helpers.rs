//! Command execution helpers
//!
//! Every command goes through [`execute_command`], which times it, logs the
//! outcome and decides what the caller is allowed to see of a failure.

use std::future::Future;
use std::time::Instant;

use researchd_domain::{ResearchdError, Result as DomainResult};
use tracing::error;

use crate::utils::logging::{error_label, log_command_execution};

/// Message callers get in place of infrastructure failures
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Execute a command with timing, outcome logging and error sanitization
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext, id: i64) -> Result<MyResponse> {
///     execute_command("my_module::my_command", || async {
///         ctx.some_service.do_something(id).await
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    let elapsed = start.elapsed();

    log_command_execution(command_name, elapsed, result.as_ref().err().map(error_label));

    result.map_err(|err| sanitize_error(command_name, err))
}

/// Pass client errors through; replace everything else with a generic
/// internal error after logging the detail.
pub fn sanitize_error(command_name: &str, err: ResearchdError) -> ResearchdError {
    if err.is_client_error() {
        return err;
    }
    error!(command = command_name, error = %err, "command failed with internal error");
    ResearchdError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
}

/// Same as [`execute_command`] with the error rendered to a string
pub async fn execute_with_string_error<F, Fut, T>(
    command_name: &str,
    command_fn: F,
) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    execute_command(command_name, command_fn).await.map_err(|e| e.to_string())
}
