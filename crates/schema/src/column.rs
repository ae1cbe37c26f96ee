//! Column declarations.
//!
//! Columns are built with `const fn`s so concrete tables can be declared as
//! `static` data:
//!
//! ```
//! use schema::ColumnSpec;
//!
//! const COLUMNS: &[ColumnSpec] = &[
//!     ColumnSpec::text("template").required().check_text(),
//!     ColumnSpec::numeric("minimum_capacity").check_numeric(),
//!     ColumnSpec::text("ventilation_per_person_unit").defaults_to("cfm/person"),
//! ];
//! assert!(COLUMNS[0].is_required());
//! ```

use std::fmt;

use record::FieldValue;

// ---------------------------------------------------------------------------
// SqlType
// ---------------------------------------------------------------------------

/// Declared SQLite column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Numeric,
    Integer,
}

impl SqlType {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Numeric => "NUMERIC",
            Self::Integer => "INTEGER",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

// ---------------------------------------------------------------------------
// FieldCheck
// ---------------------------------------------------------------------------

/// Advisory type expectation applied by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    /// Not inspected.
    None,
    /// Must be text.
    Text,
    /// Must be a number or numeric-looking text.
    Numeric,
}

impl fmt::Display for FieldCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "any"),
            Self::Text => write!(f, "string"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateValue
// ---------------------------------------------------------------------------

/// A `const`-friendly default value held by the record template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemplateValue {
    Text(&'static str),
    Real(f64),
    Integer(i64),
}

impl TemplateValue {
    pub fn to_field_value(self) -> FieldValue {
        match self {
            Self::Text(v) => FieldValue::Text(v.to_owned()),
            Self::Real(v) => FieldValue::Real(v),
            Self::Integer(v) => FieldValue::Integer(v),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnSpec
// ---------------------------------------------------------------------------

/// One column of a table, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub not_null: bool,
    /// Text literal emitted as `DEFAULT '<literal>'` in the create statement.
    pub sql_default: Option<&'static str>,
    /// Template default; `None` marks the column as required.
    pub default: Option<TemplateValue>,
    pub check: FieldCheck,
    /// Extra hint shown in the record info (e.g. what an id refers to).
    pub note: Option<&'static str>,
}

impl ColumnSpec {
    const fn optional(name: &'static str, sql_type: SqlType, default: TemplateValue) -> Self {
        Self {
            name,
            sql_type,
            not_null: false,
            sql_default: None,
            default: Some(default),
            check: FieldCheck::None,
            note: None,
        }
    }

    /// Optional `TEXT` column defaulting to `""`.
    pub const fn text(name: &'static str) -> Self {
        Self::optional(name, SqlType::Text, TemplateValue::Text(""))
    }

    /// Optional `NUMERIC` column defaulting to `0.0`.
    pub const fn numeric(name: &'static str) -> Self {
        Self::optional(name, SqlType::Numeric, TemplateValue::Real(0.0))
    }

    /// Optional `INTEGER` column defaulting to `0`.
    pub const fn integer(name: &'static str) -> Self {
        Self::optional(name, SqlType::Integer, TemplateValue::Integer(0))
    }

    /// `NOT NULL` and no template default: the record must supply it.
    pub const fn required(self) -> Self {
        Self {
            not_null: true,
            default: None,
            ..self
        }
    }

    /// Text default shared by the SQL `DEFAULT` clause and the template.
    pub const fn defaults_to(self, literal: &'static str) -> Self {
        Self {
            sql_default: Some(literal),
            default: Some(TemplateValue::Text(literal)),
            ..self
        }
    }

    pub const fn check_text(self) -> Self {
        Self {
            check: FieldCheck::Text,
            ..self
        }
    }

    pub const fn check_numeric(self) -> Self {
        Self {
            check: FieldCheck::Numeric,
            ..self
        }
    }

    pub const fn note(self, note: &'static str) -> Self {
        Self {
            note: Some(note),
            ..self
        }
    }

    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// The default used during preprocessing, `None` for required columns.
    pub fn default_value(&self) -> Option<FieldValue> {
        self.default.map(TemplateValue::to_field_value)
    }

    /// The value shown for this column in the record template. Required
    /// columns show a blank `""` slot whatever their type.
    pub fn template_value(&self) -> FieldValue {
        self.default_value()
            .unwrap_or_else(|| FieldValue::Text(String::new()))
    }
}
