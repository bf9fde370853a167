//! Shared classification of pool and Diesel failures.
//!
//! Repositories map each [`DieselFailure`] into their own port error type,
//! keeping the connection/query split consistent across adapters.

use tracing::debug;

use super::pool::PoolError;

/// Coarse failure category shared by the Diesel adapters.
pub(super) enum DieselFailure {
    /// The database could not be reached or the connection dropped.
    Connection(String),
    /// The statement itself failed.
    Query(String),
}

impl DieselFailure {
    /// Fold the classification into a repository error via the two
    /// constructors.
    pub(super) fn into_error<E>(
        self,
        connection: impl FnOnce(String) -> E,
        query: impl FnOnce(String) -> E,
    ) -> E {
        match self {
            Self::Connection(message) => connection(message),
            Self::Query(message) => query(message),
        }
    }
}

/// Pool failures always mean the database is unreachable.
pub(super) fn classify_pool_error(error: PoolError) -> DieselFailure {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    DieselFailure::Connection(message)
}

/// Classify a Diesel error, logging the raw failure before redacting it.
pub(super) fn classify_diesel_error(error: diesel::result::Error) -> DieselFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(
            error_type = %std::any::type_name_of_val(other),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error".into())
        }
        DieselError::NotFound => DieselFailure::Query("record not found".into()),
        _ => DieselFailure::Query("database error".into()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_failures_classify_as_connection() {
        let failure = classify_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(failure, DieselFailure::Connection(ref m) if m == "connection refused"));
    }

    #[rstest]
    fn not_found_classifies_as_query() {
        let failure = classify_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(failure, DieselFailure::Query(_)));
    }
}
