//! Advisory per-field type validation.
//!
//! Only fields that are present and truthy are inspected: a missing required
//! field is not a validation failure, it surfaces later as a missing-field
//! error from preprocessing.

use record::{is_numeric, FieldValue, Record};

use crate::{FieldCheck, TableSchema, ValidationError};

impl TableSchema {
    /// Check every declared field expectation against `record`.
    ///
    /// # Errors
    /// - [`ValidationError::InvalidFieldType`] for the first column whose
    ///   present value does not match its check.
    pub fn validate_record<R: Record + ?Sized>(&self, record: &R) -> Result<(), ValidationError> {
        for column in self.columns {
            if column.check == FieldCheck::None {
                continue;
            }
            let Some(value) = record.lookup(column.name) else {
                continue;
            };
            if !value.is_truthy() {
                continue;
            }
            if !satisfies(column.check, &value) {
                return Err(ValidationError::InvalidFieldType {
                    field: column.name.to_owned(),
                    expected: column.check,
                    received: format!("{} {value}", value.kind()),
                });
            }
        }
        Ok(())
    }
}

fn satisfies(check: FieldCheck, value: &FieldValue) -> bool {
    match check {
        FieldCheck::None => true,
        FieldCheck::Text => matches!(value, FieldValue::Text(_)),
        FieldCheck::Numeric => is_numeric(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::UNITS;
    use record::MapRecord;

    #[test]
    fn numeric_text_passes_numeric_check() {
        let record = MapRecord::new().with("label", "x").with("factor", "12.5");
        assert!(UNITS.validate_record(&record).is_ok());
    }

    #[test]
    fn non_numeric_text_fails_numeric_check() {
        let record = MapRecord::new().with("factor", "abc");
        let err = UNITS.validate_record(&record).unwrap_err();
        match err {
            ValidationError::InvalidFieldType {
                field,
                expected,
                received,
            } => {
                assert_eq!(field, "factor");
                assert_eq!(expected, FieldCheck::Numeric);
                assert_eq!(received, "text \"abc\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn number_fails_text_check() {
        let record = MapRecord::new().with("label", 7.5);
        let err = UNITS.validate_record(&record).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 'label' requires string data, instead got real 7.5"
        );
    }

    #[test]
    fn falsy_and_absent_values_are_skipped() {
        let record = MapRecord::new()
            .with("label", 0)
            .with("factor", "");
        assert!(UNITS.validate_record(&record).is_ok());
        assert!(UNITS.validate_record(&MapRecord::new()).is_ok());
    }

    #[test]
    fn unchecked_columns_accept_anything() {
        let record = MapRecord::new().with("unit", 3).with("rank", "high");
        assert!(UNITS.validate_record(&record).is_ok());
    }
}
