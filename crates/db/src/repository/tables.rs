//! Table creation and introspection.

use schema::{StoredColumn, TableName, TableSchema};
use sqlx::Row;
use tracing::{info, warn};

use crate::{DbConnection, DbError, SchemaError};

/// Issue the create statement and confirm the stored layout matches.
///
/// Each stored column must agree with the schema on name, position, declared
/// type, `NOT NULL` and primary-key membership.
///
/// Safe to call repeatedly: the statement is `CREATE TABLE IF NOT EXISTS`.
///
/// # Errors
/// - [`SchemaError::CreateFailed`] if SQLite rejects the statement.
/// - [`SchemaError::Incompatible`] if a same-named table has another layout.
pub async fn ensure_table(
    conn: &mut DbConnection,
    schema: &TableSchema,
    table: &TableName,
) -> Result<(), DbError> {
    let sql = schema.create_table_sql(table);
    sqlx::query(&sql)
        .execute(&mut *conn)
        .await
        .map_err(|source| SchemaError::CreateFailed {
            table: table.to_string(),
            source,
        })?;

    let found = existing_columns(conn, table).await?;
    let expected = schema.stored_columns();

    if found != expected {
        warn!(table = %table, ?found, ?expected, "Existing table has an incompatible layout");
        return Err(SchemaError::Incompatible {
            table: table.to_string(),
            expected,
            found,
        }
        .into());
    }

    info!(table = %table, columns = expected.len(), "Table ensured");
    Ok(())
}

/// Columns of `table` as stored, in declaration order. Empty when the table
/// does not exist.
pub async fn existing_columns(
    conn: &mut DbConnection,
    table: &TableName,
) -> Result<Vec<StoredColumn>, DbError> {
    let rows = sqlx::query(
        r#"SELECT name, type, "notnull", pk FROM pragma_table_info(?) ORDER BY cid"#,
    )
    .bind(table.as_str())
    .fetch_all(&mut *conn)
    .await?;

    let columns = rows
        .iter()
        .map(|row| -> Result<StoredColumn, sqlx::Error> {
            let name: String = row.try_get("name")?;
            let sql_type: String = row.try_get("type")?;
            let not_null: i64 = row.try_get("notnull")?;
            let pk: i64 = row.try_get("pk")?;
            Ok(StoredColumn::new(name, &sql_type, not_null != 0, pk > 0))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

/// Whether `table` exists in the connected database.
pub async fn table_exists(conn: &mut DbConnection, table: &TableName) -> Result<bool, DbError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table.as_str())
            .fetch_one(&mut *conn)
            .await?;
    Ok(count > 0)
}
