//! Record-level error type.

use thiserror::Error;

/// Errors raised while reading fields out of an input record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required field is absent and no default was supplied.
    #[error("missing required field '{field}' in record {record}")]
    MissingField {
        field: String,
        /// Human-readable rendering of the offending record.
        record: String,
    },

    /// An attribute record was built from a value that has no named fields.
    #[error("'{type_name}' does not expose named attributes")]
    NotAnObject { type_name: String },

    /// The object could not be serialised into an attribute snapshot.
    #[error("cannot read attributes: {0}")]
    Serialize(#[from] serde_json::Error),
}
