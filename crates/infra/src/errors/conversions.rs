//! Conversions from external infrastructure errors into domain errors.

use researchd_common::storage::StorageError;
use researchd_common::PasswordError;
use researchd_domain::ResearchdError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ResearchdError);

/// Result type for blocking repository closures
pub type InfraResult<T> = std::result::Result<T, InfraError>;

impl From<InfraError> for ResearchdError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ResearchdError> for InfraError {
    fn from(value: ResearchdError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoResearchdError {
    fn into_researchd(self) -> ResearchdError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → ResearchdError */
/* -------------------------------------------------------------------------- */

impl IntoResearchdError for SqlError {
    fn into_researchd(self) -> ResearchdError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        ResearchdError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        ResearchdError::Database("database is locked".into())
                    }
                    // SQLITE_CONSTRAINT_UNIQUE / SQLITE_CONSTRAINT_PRIMARYKEY
                    (ErrorCode::ConstraintViolation, 2067 | 1555) => {
                        ResearchdError::Conflict("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        ResearchdError::Database("foreign key constraint violation".into())
                    }
                    _ => ResearchdError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => ResearchdError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                ResearchdError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                ResearchdError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidParameterName(parameter_name) => {
                ResearchdError::Database(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => ResearchdError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => ResearchdError::Database("invalid SQL query".into()),
            other => ResearchdError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_researchd())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → ResearchdError */
/* -------------------------------------------------------------------------- */

impl IntoResearchdError for StorageError {
    fn into_researchd(self) -> ResearchdError {
        match self {
            StorageError::Rusqlite(err) => err.into_researchd(),
            StorageError::Timeout(secs) => {
                ResearchdError::Database(format!("timed out after {secs}s waiting for a connection"))
            }
            StorageError::Io(err) => ResearchdError::Database(format!("database I/O error: {err}")),
            StorageError::InvalidConfig(msg) => ResearchdError::Config(msg),
            other => ResearchdError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_researchd())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ResearchdError */
/* -------------------------------------------------------------------------- */

impl IntoResearchdError for std::io::Error {
    fn into_researchd(self) -> ResearchdError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::PermissionDenied => {
                ResearchdError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::AlreadyExists => {
                ResearchdError::Storage(format!("blob already exists: {self}"))
            }
            _ => ResearchdError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_researchd())
    }
}

/* -------------------------------------------------------------------------- */
/* PasswordError → ResearchdError */
/* -------------------------------------------------------------------------- */

impl From<PasswordError> for InfraError {
    fn from(value: PasswordError) -> Self {
        InfraError(ResearchdError::Internal(value.to_string()))
    }
}

/// Map a failed `spawn_blocking` join into the domain error
pub fn map_join_error(err: JoinError) -> ResearchdError {
    ResearchdError::Internal(format!("Task join error: {err}"))
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use rusqlite::ffi::{Error as FfiError, ErrorCode};

    use super::*;

    fn failure(code: ErrorCode, extended_code: i32) -> SqlError {
        SqlError::SqliteFailure(FfiError { code, extended_code }, Some("boom".into()))
    }

    #[test]
    fn sqlite_busy_maps_to_database_error() {
        let err: ResearchdError = InfraError::from(failure(ErrorCode::DatabaseBusy, 5)).into();
        assert_eq!(err, ResearchdError::Database("database is busy".into()));
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err: ResearchdError =
            InfraError::from(failure(ErrorCode::ConstraintViolation, 2067)).into();
        assert!(matches!(err, ResearchdError::Conflict(_)));
    }

    #[test]
    fn foreign_key_violation_is_not_a_conflict() {
        let err: ResearchdError =
            InfraError::from(failure(ErrorCode::ConstraintViolation, 787)).into();
        assert!(matches!(err, ResearchdError::Database(_)));
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let err: ResearchdError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(err, ResearchdError::NotFound(_)));
    }

    #[test]
    fn storage_errors_unwrap_rusqlite_causes() {
        let err: ResearchdError =
            InfraError::from(StorageError::Rusqlite(failure(ErrorCode::ConstraintViolation, 1555)))
                .into();
        assert!(matches!(err, ResearchdError::Conflict(_)));

        let err: ResearchdError = InfraError::from(StorageError::Timeout(5)).into();
        assert!(matches!(err, ResearchdError::Database(msg) if msg.contains("5s")));
    }

    #[test]
    fn io_errors_map_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: ResearchdError = InfraError::from(io).into();
        assert_eq!(err, ResearchdError::Storage("disk full".into()));
    }
}
