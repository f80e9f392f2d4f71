//! Error types for the placement engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup and the
//! placement run so `main` can propagate with `?`.

/// Top-level error for the placement engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: zoo_core::config::ConfigError,
    },

    /// The database could not be reached, migrated, or queried.
    #[error("database error: {source}")]
    Db {
        /// The underlying data layer error.
        #[from]
        source: zoo_db::DbError,
    },
}
