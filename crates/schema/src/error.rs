//! Schema-level error types.

use thiserror::Error;

use crate::FieldCheck;

/// Errors produced while checking records and table identities against a
/// schema.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A present field does not hold the kind of value its column expects.
    #[error("field '{field}' requires {expected} data, instead got {received}")]
    InvalidFieldType {
        field: String,
        expected: FieldCheck,
        received: String,
    },

    /// A table name contains characters outside the identifier set, or
    /// uses the reserved `sqlite_` prefix.
    #[error("invalid table name '{0}': expected [A-Za-z_][A-Za-z0-9_]* of at most 128 characters, not starting with sqlite_")]
    InvalidTableName(String),

    /// A caller tried to rename a table whose identity is fixed.
    #[error("table '{table}' has a fixed name and cannot be instantiated as '{requested}'")]
    FixedIdentity { table: String, requested: String },
}
