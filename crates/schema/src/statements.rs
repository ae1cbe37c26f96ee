//! Parameterized statement builders.
//!
//! Table names arrive as [`TableName`]. Every identifier is double-quoted,
//! so a keyword such as `order` is a legal table name; every value travels
//! as a `?` placeholder.

use std::fmt::Write as _;

use crate::table::SURROGATE_KEY;
use crate::{ColumnSpec, PrimaryKey, TableName, TableSchema};

impl TableSchema {
    /// `CREATE TABLE IF NOT EXISTS …` for this schema under `table`.
    pub fn create_table_sql(&self, table: &TableName) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.columns.len() + 2);

        if self.primary_key == PrimaryKey::Surrogate {
            lines.push(format!("{} INTEGER PRIMARY KEY", quoted(SURROGATE_KEY)));
        }
        for column in self.columns {
            lines.push(self.column_definition(column));
        }
        for fk in self.foreign_keys {
            lines.push(format!(
                "FOREIGN KEY({}) REFERENCES {}({})",
                quoted(fk.column),
                quoted(fk.references_table),
                quoted(fk.references_column)
            ));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
            quoted(table.as_str()),
            lines.join(",\n    ")
        )
    }

    /// `INSERT INTO … VALUES (?, …)` with one placeholder per declared column.
    pub fn insert_sql(&self, table: &TableName) -> String {
        let columns = self.quoted_columns();
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders});",
            quoted(table.as_str())
        )
    }

    /// Reads rows back in declared column order and insertion order.
    pub fn select_sql(&self, table: &TableName) -> String {
        format!(
            "SELECT {} FROM {} ORDER BY rowid;",
            self.quoted_columns(),
            quoted(table.as_str())
        )
    }

    pub fn count_sql(&self, table: &TableName) -> String {
        format!("SELECT COUNT(*) FROM {};", quoted(table.as_str()))
    }

    fn quoted_columns(&self) -> String {
        self.column_names().map(quoted).collect::<Vec<_>>().join(", ")
    }

    fn column_definition(&self, column: &ColumnSpec) -> String {
        let mut def = format!("{} {}", quoted(column.name), column.sql_type);
        if self.natural_key() == Some(column.name) {
            def.push_str(" UNIQUE NOT NULL PRIMARY KEY");
            return def;
        }
        if column.not_null {
            def.push_str(" NOT NULL");
        }
        if let Some(literal) = column.sql_default {
            let _ = write!(def, " DEFAULT '{}'", literal.replace('\'', "''"));
        }
        def
    }
}

/// Double-quote an identifier. Callers only pass validated table names and
/// static column names, neither of which can contain `"`.
fn quoted(identifier: &str) -> String {
    format!("\"{identifier}\"")
}

/// Number of `?` placeholders in a statement.
pub fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}
