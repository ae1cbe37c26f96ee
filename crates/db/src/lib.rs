//! `db` crate — SQLite persistence for standards tables.
//!
//! Provides the connection, the table-descriptor lifecycle and repository
//! functions that run a [`schema::TableSchema`] against a live database.
//! No standards logic lives here.

pub mod config;
pub mod connection;
pub mod descriptor;
pub mod error;
pub mod repository;
mod values;

pub use config::DbConfig;
pub use connection::{connect, DbConnection};
pub use descriptor::{Table, TableDescriptor};
pub use error::{DbError, SchemaError};
