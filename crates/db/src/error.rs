//! Typed error types for the db crate.

use record::RecordError;
use schema::{StoredColumn, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A required field was missing from the input record.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A present field failed its type check, or a table name was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A natural-key (or other unique) value is already stored.
    #[error("duplicate key {key} in table '{table}'")]
    DuplicateKey { table: String, key: String },
}

/// Failures while ensuring a table exists.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The create statement itself was rejected.
    #[error("failed to create table '{table}': {source}")]
    CreateFailed {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// A table of that name already exists with a different layout.
    #[error("table '{table}' exists as [{}], expected [{}]", join(.found), join(.expected))]
    Incompatible {
        table: String,
        expected: Vec<StoredColumn>,
        found: Vec<StoredColumn>,
    },
}

fn join(columns: &[StoredColumn]) -> String {
    columns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
