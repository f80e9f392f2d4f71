//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors and flags rows that do not map back onto the domain
//! types.

use zoo_types::ParseEnumError;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored enumeration column holds an unknown value.
    #[error("invalid stored value: {0}")]
    InvalidValue(#[from] ParseEnumError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
