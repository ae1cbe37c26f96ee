//! Preprocessing: input record → ordered insertion tuple.

use record::{resolve_field, FieldValue, Record, RecordError};

use crate::TableSchema;

/// Column values in insert-statement order.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertionTuple(Vec<FieldValue>);

impl InsertionTuple {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.0
    }

    pub fn into_values(self) -> Vec<FieldValue> {
        self.0
    }
}

impl TableSchema {
    /// Resolve every declared column from `record`, in order.
    ///
    /// Optional columns fall back to their template default; required columns
    /// must be present.
    ///
    /// # Errors
    /// - [`RecordError::MissingField`] for the first absent required column.
    pub fn preprocess_record<R: Record + ?Sized>(
        &self,
        record: &R,
    ) -> Result<InsertionTuple, RecordError> {
        self.columns
            .iter()
            .map(|column| resolve_field(column.name, record, column.default_value().as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(InsertionTuple)
    }
}
