//! Error types for crudgen

use thiserror::Error;

/// The main error type for crudgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// The table has no primary key column
    #[error("table {table} does not have a primary key, cannot generate sql")]
    NoPrimaryKey { table: String },

    /// Soft delete requested for a table without a `deleted_at`/`DeletedAt` column
    #[error("table {table} does not have a deleted at column, cannot generate sql")]
    NoDeletedAtColumn { table: String },

    /// Schema document is structurally valid JSON but describes bad metadata
    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },

    /// Table not found error
    #[error("Table '{table}' not found")]
    TableNotFound { table: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database connection or execution error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience Result type for crudgen operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new missing primary key error
    pub fn no_primary_key(table: impl Into<String>) -> Self {
        Self::NoPrimaryKey {
            table: table.into(),
        }
    }

    /// Create a new missing deleted-at column error
    pub fn no_deleted_at_column(table: impl Into<String>) -> Self {
        Self::NoDeletedAtColumn {
            table: table.into(),
        }
    }

    /// Create a new invalid schema error
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }

    /// Create a new table not found error
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }

    /// True when the table metadata cannot support the requested statement.
    ///
    /// These errors are never worth retrying; the schema has to change.
    pub fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            Error::NoPrimaryKey { .. } | Error::NoDeletedAtColumn { .. }
        )
    }
}
