use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors raised by [`ClientRepository`](super::ClientRepository) operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A phone number is already owned by some client
    #[error("unique constraint violated ({})", constraint.as_deref().unwrap_or("unknown constraint"))]
    UniqueViolation { constraint: Option<String> },

    /// The referenced client does not exist
    #[error("foreign key constraint violated ({})", constraint.as_deref().unwrap_or("unknown constraint"))]
    ForeignKeyViolation { constraint: Option<String> },

    /// The database could not be reached
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().map(str::to_owned);
            match db_err.kind() {
                ErrorKind::UniqueViolation => return Self::UniqueViolation { constraint },
                ErrorKind::ForeignKeyViolation => return Self::ForeignKeyViolation { constraint },
                _ => {}
            }
        }

        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::Connection(err),
            other => Self::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn pool_and_io_failures_are_connection_errors() {
        let timed_out = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(timed_out, RepositoryError::Connection(_)));

        let closed = RepositoryError::from(sqlx::Error::PoolClosed);
        assert!(matches!(closed, RepositoryError::Connection(_)));

        let refused = RepositoryError::from(sqlx::Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )));
        assert!(matches!(refused, RepositoryError::Connection(_)));
    }

    #[test]
    fn other_failures_are_database_errors() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(_)));
        assert!(err.to_string().starts_with("database error"));
    }

    #[test]
    fn constraint_errors_name_the_constraint() {
        let err = RepositoryError::UniqueViolation {
            constraint: Some("phones_phone_key".to_string()),
        };
        assert_eq!(err.to_string(), "unique constraint violated (phones_phone_key)");

        let err = RepositoryError::ForeignKeyViolation { constraint: None };
        assert_eq!(
            err.to_string(),
            "foreign key constraint violated (unknown constraint)"
        );
    }
}
