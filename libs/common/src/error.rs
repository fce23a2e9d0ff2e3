//! Errors raised while configuring or talking to PostgreSQL
//!
//! The services hand these messages straight to API callers, so each variant
//! says which stage failed before the underlying driver message.

use config::ConfigError;
use sqlx::Error as SqlxError;
use thiserror::Error;

/// Failure while configuring, connecting to or querying the database
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not open a connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A statement failed on an established pool
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// The `DB_*` settings are missing or malformed
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl From<ConfigError> for DatabaseError {
    fn from(err: ConfigError) -> Self {
        DatabaseError::Configuration(err.to_string())
    }
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
