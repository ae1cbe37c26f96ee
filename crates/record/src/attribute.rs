//! `AttributeRecord` — an input record backed by a structured object.
//!
//! Richer callers keep their rows as typed structs. Any `Serialize` struct
//! exposes its fields as attributes; the snapshot is taken once, at
//! construction, so lookups are cheap and the object is not retained.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{FieldValue, Record, RecordError};

/// An input record whose fields are read as attributes of an object.
#[derive(Debug, Clone)]
pub struct AttributeRecord {
    type_name: &'static str,
    attributes: Map<String, Value>,
}

impl AttributeRecord {
    /// Snapshot the named fields of `object`.
    ///
    /// # Errors
    /// - [`RecordError::NotAnObject`] if `T` does not serialise to a struct
    ///   or map (e.g. a bare number or a tuple).
    pub fn from_object<T: Serialize + ?Sized>(object: &T) -> Result<Self, RecordError> {
        let type_name = std::any::type_name::<T>();
        match serde_json::to_value(object)? {
            Value::Object(attributes) => Ok(Self {
                type_name,
                attributes,
            }),
            _ => Err(RecordError::NotAnObject {
                type_name: type_name.to_owned(),
            }),
        }
    }
}

impl Record for AttributeRecord {
    fn lookup(&self, field: &str) -> Option<FieldValue> {
        self.attributes.get(field).map(FieldValue::from)
    }

    fn describe(&self) -> String {
        format!("{} {}", self.type_name, Value::Object(self.attributes.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct VentTag {
        ventilation_space_type_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        annotation: Option<String>,
        note: Option<String>,
    }

    #[test]
    fn struct_fields_are_attributes() {
        let tag = VentTag {
            ventilation_space_type_name: "Office".into(),
            annotation: None,
            note: None,
        };
        let record = AttributeRecord::from_object(&tag).expect("struct converts");

        assert_eq!(
            record.lookup("ventilation_space_type_name"),
            Some("Office".into())
        );
        // Skipped attributes are absent, `None` attributes are present-but-null.
        assert_eq!(record.lookup("annotation"), None);
        assert_eq!(record.lookup("note"), Some(FieldValue::Null));
        assert!(record.describe().contains("VentTag"));
    }

    #[test]
    fn scalars_have_no_attributes() {
        let err = AttributeRecord::from_object(&42_u32).unwrap_err();
        assert!(matches!(err, RecordError::NotAnObject { .. }));
    }
}
