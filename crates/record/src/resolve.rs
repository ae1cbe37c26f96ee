//! Field resolution with defaulting.

use crate::{FieldValue, Record, RecordError};

/// Read `field` from `record`, falling back to `default`.
///
/// The value is returned exactly as the record holds it. Pass `None` as the
/// default for a required field.
///
/// # Errors
/// - [`RecordError::MissingField`] if the field is absent and no default was
///   given.
pub fn resolve_field<R: Record + ?Sized>(
    field: &str,
    record: &R,
    default: Option<&FieldValue>,
) -> Result<FieldValue, RecordError> {
    if let Some(value) = record.lookup(field) {
        return Ok(value);
    }

    default.cloned().ok_or_else(|| RecordError::MissingField {
        field: field.to_owned(),
        record: record.describe(),
    })
}
