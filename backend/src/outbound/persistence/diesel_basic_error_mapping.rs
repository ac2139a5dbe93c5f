//! Shared Diesel error classification for the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse failure class of a Diesel error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// A unique constraint rejected the write; carries the constraint name.
    UniqueViolation(Option<String>),
    /// Any other query failure.
    Query(&'static str),
}

/// Classify a Diesel error, logging the raw cause at debug level.
pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DeserializationError(_) => DieselFailure::Query("row decoding failed"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation(info.constraint_name().map(str::to_owned))
        }
        _ => DieselFailure::Query("database error"),
    }
}

/// Map pool errors through a repository's connection-error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.message().to_owned())
}
