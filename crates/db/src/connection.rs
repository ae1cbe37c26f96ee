//! SQLite connection.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tracing::info;

use crate::{DbConfig, DbError};

/// The single connection a loading session works against.
///
/// Every operation borrows it mutably, so writes are serialised by
/// construction.
pub type DbConnection = SqliteConnection;

/// Open a connection described by `config`.
pub async fn connect(config: &DbConfig) -> Result<DbConnection, DbError> {
    info!(
        "Opening database {} (foreign_keys={})",
        config.database_url, config.foreign_keys
    );
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(config.foreign_keys);
    let conn = SqliteConnection::connect_with(&options).await?;
    Ok(conn)
}
