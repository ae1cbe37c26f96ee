//! The `Record` trait — the contract every input representation fulfils.

use crate::FieldValue;

/// Read access to the named fields of an input record.
///
/// A record is borrowed for the duration of one insert and never retained.
pub trait Record {
    /// Look up `field`, returning `None` when the record has no such field.
    ///
    /// A field that is present but null comes back as `Some(FieldValue::Null)`.
    fn lookup(&self, field: &str) -> Option<FieldValue>;

    /// A short human-readable rendering used in error messages.
    fn describe(&self) -> String;
}

impl<R: Record + ?Sized> Record for &R {
    fn lookup(&self, field: &str) -> Option<FieldValue> {
        (**self).lookup(field)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn lookup(&self, field: &str) -> Option<FieldValue> {
        (**self).lookup(field)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
