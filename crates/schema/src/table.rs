//! Table-level declarations: identity, key strategy and foreign keys.

use std::fmt;

use crate::{ColumnSpec, TableName, ValidationError};

/// How a table gets its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableIdentity {
    /// Always lives under this one name.
    Fixed(&'static str),
    /// Instantiated under a caller-chosen name (e.g. one table per standard
    /// edition). `default_name` is used when bulk-creating every table.
    Parameterized { default_name: &'static str },
}

/// Primary key strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKey {
    /// Implicit `id INTEGER PRIMARY KEY` ahead of the declared columns.
    Surrogate,
    /// The named text column is the unique key ("tag table").
    Natural(&'static str),
}

/// `FOREIGN KEY(column) REFERENCES table(referenced_column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

/// Declarative description of one standards table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSchema {
    pub identity: TableIdentity,
    pub primary_key: PrimaryKey,
    pub columns: &'static [ColumnSpec],
    pub foreign_keys: &'static [ForeignKey],
    /// One-line summary shown at the top of the record info.
    pub description: &'static str,
}

/// Name of the implicit surrogate key column.
pub const SURROGATE_KEY: &str = "id";

/// A column as SQLite reports it through `pragma_table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredColumn {
    pub name: String,
    /// Declared type, upper-cased.
    pub sql_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

impl StoredColumn {
    pub fn new(name: impl Into<String>, sql_type: &str, not_null: bool, primary_key: bool) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.to_ascii_uppercase(),
            not_null,
            primary_key,
        }
    }
}

impl fmt::Display for StoredColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.sql_type)?;
        if self.not_null {
            f.write_str(" NOT NULL")?;
        }
        if self.primary_key {
            f.write_str(" PRIMARY KEY")?;
        }
        Ok(())
    }
}

impl TableSchema {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Columns a table of this schema has on disk, in order, including the
    /// surrogate key when there is one.
    ///
    /// The natural key is reported as a `NOT NULL` primary key; SQLite backs
    /// a non-integer primary key with a unique index.
    pub fn stored_columns(&self) -> Vec<StoredColumn> {
        let mut stored = Vec::with_capacity(self.columns.len() + 1);
        if self.primary_key == PrimaryKey::Surrogate {
            stored.push(StoredColumn::new(SURROGATE_KEY, "INTEGER", false, true));
        }
        for column in self.columns {
            let is_key = self.natural_key() == Some(column.name);
            stored.push(StoredColumn::new(
                column.name,
                column.sql_type.as_sql(),
                column.not_null || is_key,
                is_key,
            ));
        }
        stored
    }

    pub fn natural_key(&self) -> Option<&'static str> {
        match self.primary_key {
            PrimaryKey::Natural(column) => Some(column),
            PrimaryKey::Surrogate => None,
        }
    }

    /// The name a table gets when the caller does not choose one.
    ///
    /// # Errors
    /// - [`ValidationError::InvalidTableName`] if the declared name is not a
    ///   valid identifier.
    pub fn default_name(&self) -> Result<TableName, ValidationError> {
        match self.identity {
            TableIdentity::Fixed(name) | TableIdentity::Parameterized { default_name: name } => {
                TableName::new(name)
            }
        }
    }

    /// Resolve a caller-chosen name against this schema's identity.
    ///
    /// # Errors
    /// - [`ValidationError::InvalidTableName`] for a malformed name.
    /// - [`ValidationError::FixedIdentity`] when a fixed table is asked to
    ///   live under another name.
    pub fn named(&self, requested: &str) -> Result<TableName, ValidationError> {
        let name = TableName::new(requested)?;
        match self.identity {
            TableIdentity::Fixed(fixed) if fixed != name.as_str() => {
                Err(ValidationError::FixedIdentity {
                    table: fixed.to_owned(),
                    requested: requested.to_owned(),
                })
            }
            _ => Ok(name),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) static UNITS: TableSchema = TableSchema {
        identity: TableIdentity::Parameterized {
            default_name: "units_default",
        },
        primary_key: PrimaryKey::Surrogate,
        columns: &[
            ColumnSpec::text("label").required().check_text(),
            ColumnSpec::numeric("factor").check_numeric(),
            ColumnSpec::text("unit").defaults_to("cfm/ft2"),
            ColumnSpec::integer("rank"),
        ],
        foreign_keys: &[],
        description: "Unit conversion factors.",
    };

    pub(crate) static TAGS: TableSchema = TableSchema {
        identity: TableIdentity::Fixed("tags"),
        primary_key: PrimaryKey::Natural("tag"),
        columns: &[ColumnSpec::text("tag").required()],
        foreign_keys: &[],
        description: "Tag vocabulary.",
    };

    #[test]
    fn stored_columns_include_surrogate_key() {
        let stored: Vec<String> = UNITS.stored_columns().iter().map(ToString::to_string).collect();
        assert_eq!(
            stored,
            vec![
                "id INTEGER PRIMARY KEY",
                "label TEXT NOT NULL",
                "factor NUMERIC",
                "unit TEXT",
                "rank INTEGER",
            ]
        );
    }

    #[test]
    fn natural_key_is_a_not_null_primary_key() {
        assert_eq!(
            TAGS.stored_columns(),
            vec![StoredColumn::new("tag", "text", true, true)]
        );
    }

    #[test]
    fn parameterized_tables_accept_any_valid_name() {
        assert_eq!(UNITS.named("units_2019").unwrap().as_str(), "units_2019");
        assert_eq!(UNITS.default_name().unwrap().as_str(), "units_default");
    }

    #[test]
    fn fixed_tables_keep_their_name() {
        assert_eq!(TAGS.named("tags").unwrap().as_str(), "tags");
        assert!(matches!(
            TAGS.named("other_tags"),
            Err(ValidationError::FixedIdentity { table, .. }) if table == "tags"
        ));
        assert!(matches!(
            UNITS.named("bad name"),
            Err(ValidationError::InvalidTableName(_))
        ));
    }
}
