//! Record insertion and read-back.

use record::FieldValue;
use schema::{InsertionTuple, TableName, TableSchema};
use tracing::{debug, warn};

use crate::values::{bind_value, decode_row};
use crate::{DbConnection, DbError};

/// Insert one preprocessed tuple.
///
/// # Errors
/// - [`DbError::DuplicateKey`] on a unique or primary-key violation. For
///   natural-key tables the key is the offending value.
pub async fn insert_tuple(
    conn: &mut DbConnection,
    schema: &TableSchema,
    table: &TableName,
    tuple: InsertionTuple,
) -> Result<(), DbError> {
    let sql = schema.insert_sql(table);
    let natural_key = schema
        .natural_key()
        .and_then(|key| schema.columns.iter().position(|c| c.name == key))
        .and_then(|index| tuple.values().get(index))
        .map(FieldValue::to_string);

    let query = tuple
        .into_values()
        .into_iter()
        .fold(sqlx::query(&sql), |query, value| bind_value(query, value));

    match query.execute(&mut *conn).await {
        Ok(result) => {
            debug!(table = %table, rowid = result.last_insert_rowid(), "Inserted record");
            Ok(())
        }
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            let key = natural_key.unwrap_or_else(|| err.message().to_owned());
            warn!(table = %table, key = %key, "Duplicate key rejected");
            Err(DbError::DuplicateKey {
                table: table.to_string(),
                key,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Every stored row, in declared column order and insertion order.
pub async fn fetch_records(
    conn: &mut DbConnection,
    schema: &TableSchema,
    table: &TableName,
) -> Result<Vec<Vec<FieldValue>>, DbError> {
    let sql = schema.select_sql(table);
    let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
    let records = rows
        .iter()
        .map(decode_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

pub async fn count_records(
    conn: &mut DbConnection,
    schema: &TableSchema,
    table: &TableName,
) -> Result<i64, DbError> {
    let sql = schema.count_sql(table);
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(&mut *conn).await?;
    Ok(count)
}
