//! Error types for schema introspection.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Main error type for schema operations.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// No reader exists for the driver identifier
    #[error("Unsupported database driver: {driver}")]
    UnsupportedDriver { driver: String },

    /// The driver identifier names a different backend than the connection
    #[error("Driver '{driver}' cannot read a {connection} connection")]
    DriverMismatch {
        driver: String,
        connection: &'static str,
    },

    /// Opening or checking the connection failed
    #[error("Could not connect to database ({driver}): {source}")]
    Connect {
        driver: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// An introspection query failed
    #[error("Schema query failed: {context}")]
    Query {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    /// MySQL connection has no current database
    #[error("MySQL connection has no database selected")]
    NoDatabaseSelected,
}

impl SchemaError {
    /// Wrap a query error with context.
    pub fn query(source: sqlx::Error, context: impl Into<String>) -> Self {
        SchemaError::Query {
            context: context.into(),
            source,
        }
    }
}
