//! Validated table identifiers.

use std::fmt;

use crate::ValidationError;

const MAX_TABLE_NAME_LEN: usize = 128;

/// SQLite keeps names with this prefix for its own tables.
const RESERVED_PREFIX: &str = "sqlite_";

/// A table name that is safe to splice, quoted, into statement text.
///
/// Only `[A-Za-z_][A-Za-z0-9_]*` up to 128 characters is accepted, so a name
/// can never smuggle quoting, whitespace or statement separators. Names
/// starting with `sqlite_` (in any case) are reserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(String);

impl TableName {
    /// # Errors
    /// - [`ValidationError::InvalidTableName`] if `name` is empty, too long,
    ///   starts with a digit or `sqlite_`, or contains anything but ASCII
    ///   letters, digits and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if is_identifier(&name) {
            Ok(Self(name))
        } else {
            Err(ValidationError::InvalidTableName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= MAX_TABLE_NAME_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_reserved(name)
}

fn is_reserved(name: &str) -> bool {
    name.get(..RESERVED_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(RESERVED_PREFIX))
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for TableName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
