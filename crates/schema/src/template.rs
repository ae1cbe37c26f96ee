//! Record template and human-readable record info.

use std::fmt::Write as _;

use record::MapRecord;

use crate::TableSchema;

impl TableSchema {
    /// Column name → representative default for every declared column.
    pub fn record_template(&self) -> MapRecord {
        self.columns
            .iter()
            .map(|c| (c.name, c.template_value()))
            .collect()
    }

    /// Describes the fields a record must or may carry for this table.
    pub fn record_info(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.description);
        let _ = writeln!(out, "Must provide a record that contains:");

        for column in self.columns {
            let _ = write!(out, "{}: {}", column.name, column.sql_type);

            let mut notes: Vec<String> = Vec::new();
            if self.natural_key() == Some(column.name) {
                notes.push("unique".to_owned());
            }
            if let Some(default) = column.default_value() {
                notes.push(format!("optional, default {default}"));
            }
            if let Some(note) = column.note {
                notes.push(note.to_owned());
            }
            if !notes.is_empty() {
                let _ = write!(out, " ({})", notes.join("; "));
            }
            out.push('\n');
        }
        out
    }
}
