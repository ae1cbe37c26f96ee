//! Moving `FieldValue`s in and out of SQLite.

use record::FieldValue;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Row, TypeInfo, ValueRef};

pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind one value to the next placeholder, keeping its representation.
pub(crate) fn bind_value(query: SqliteQuery<'_>, value: FieldValue) -> SqliteQuery<'_> {
    match value {
        FieldValue::Null => query.bind(None::<String>),
        FieldValue::Integer(v) => query.bind(v),
        FieldValue::Real(v) => query.bind(v),
        FieldValue::Text(v) => query.bind(v),
    }
}

/// Decode every column of `row` by its storage class.
pub(crate) fn decode_row(row: &SqliteRow) -> Result<Vec<FieldValue>, sqlx::Error> {
    (0..row.len()).map(|index| decode_column(row, index)).collect()
}

fn decode_column(row: &SqliteRow, index: usize) -> Result<FieldValue, sqlx::Error> {
    // NUMERIC affinity stores whole numbers as INTEGER, so the declared type
    // says little; go by what is actually stored.
    let storage = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(FieldValue::Null);
        }
        raw.type_info().name().to_owned()
    };

    let value = match storage.as_str() {
        "INTEGER" => FieldValue::Integer(row.try_get_unchecked(index)?),
        "REAL" => FieldValue::Real(row.try_get_unchecked(index)?),
        "BLOB" => {
            let bytes: Vec<u8> = row.try_get_unchecked(index)?;
            FieldValue::Text(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => FieldValue::Text(row.try_get_unchecked(index)?),
    };
    Ok(value)
}
