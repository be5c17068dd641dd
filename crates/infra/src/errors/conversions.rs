//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use rusqlite::Error as SqlError;
use serde_json::Error as JsonError;
use sparta_domain::SpartaError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SpartaError);

impl std::fmt::Display for InfraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for InfraError {}

impl From<InfraError> for SpartaError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SpartaError> for InfraError {
    fn from(value: SpartaError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSpartaError {
    fn into_sparta(self) -> SpartaError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → SpartaError */
/* -------------------------------------------------------------------------- */

impl IntoSpartaError for SqlError {
    fn into_sparta(self) -> SpartaError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => SpartaError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => SpartaError::Storage("database is locked".into()),
                    ErrorCode::ReadOnly => SpartaError::Storage("database is read-only".into()),
                    ErrorCode::DiskFull => SpartaError::Storage("disk is full".into()),
                    _ => SpartaError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => SpartaError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                SpartaError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                SpartaError::Storage(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => SpartaError::Storage(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => SpartaError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_sparta())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → SpartaError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(SpartaError::Storage(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → SpartaError */
/* -------------------------------------------------------------------------- */

impl IntoSpartaError for IoError {
    fn into_sparta(self) -> SpartaError {
        match self.kind() {
            ErrorKind::NotFound => SpartaError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                SpartaError::Storage(format!("permission denied: {self}"))
            }
            _ => SpartaError::Storage(format!("io error: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_sparta())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error / toml::de::Error → SpartaError */
/* -------------------------------------------------------------------------- */

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        if value.is_io() {
            return InfraError(SpartaError::Storage(format!("json io error: {value}")));
        }
        InfraError(SpartaError::InvalidInput(format!("invalid json: {value}")))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(SpartaError::Config(format!("Invalid TOML format: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_busy_maps_to_storage() {
        let err = SqlError::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            Some("busy".into()),
        );
        let mapped: SpartaError = InfraError::from(err).into();
        assert_eq!(mapped, SpartaError::Storage("database is busy".into()));
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let mapped: SpartaError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(mapped, SpartaError::NotFound(_)));
    }

    #[test]
    fn io_kinds_are_distinguished() {
        let missing: SpartaError = InfraError::from(IoError::from(ErrorKind::NotFound)).into();
        assert!(matches!(missing, SpartaError::NotFound(_)));

        let other: SpartaError = InfraError::from(IoError::other("boom")).into();
        assert!(matches!(other, SpartaError::Storage(_)));
    }

    #[test]
    fn json_syntax_errors_are_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let mapped: SpartaError = InfraError::from(err).into();
        assert!(matches!(mapped, SpartaError::InvalidInput(_)));
    }

    #[test]
    fn toml_errors_are_config() {
        let err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let mapped: SpartaError = InfraError::from(err).into();
        assert!(matches!(mapped, SpartaError::Config(_)));
    }
}
