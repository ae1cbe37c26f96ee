//! The table-descriptor lifecycle.
//!
//! A [`TableDescriptor`] binds a static [`TableSchema`] to a concrete table
//! name and source data directory. It can validate and preprocess records
//! but cannot write: [`TableDescriptor::create_table`] consumes it and hands
//! back a [`Table`], the only type that inserts.
//!
//! ```text
//! TableDescriptor ──create_table──▶ Table ──insert_record──▶ Table
//!  (uninitialized)                 (ensured)   (repeatable)
//! ```

use std::ops::Deref;
use std::path::{Path, PathBuf};

use record::{FieldValue, MapRecord, Record};
use schema::{InsertionTuple, TableName, TableSchema};
use tracing::debug;

use crate::repository::{records, tables};
use crate::{DbConnection, DbError};

/// Root under which each table's source files live, one directory per table.
pub const DATA_ROOT: &str = "database_files";

/// A table that has not been ensured on a connection yet.
#[derive(Debug, Clone)]
pub struct TableDescriptor {
    schema: &'static TableSchema,
    name: TableName,
    data_directory: PathBuf,
}

impl TableDescriptor {
    /// Instantiate `schema` under its fixed or default name.
    pub fn new(schema: &'static TableSchema) -> Result<Self, DbError> {
        let name = schema.default_name()?;
        Ok(Self::with_name(schema, name))
    }

    /// Instantiate `schema` under a caller-chosen name.
    ///
    /// # Errors
    /// - [`schema::ValidationError::InvalidTableName`] for a malformed name.
    /// - [`schema::ValidationError::FixedIdentity`] if the schema's name is
    ///   fixed and `table_name` differs from it.
    pub fn named(schema: &'static TableSchema, table_name: &str) -> Result<Self, DbError> {
        let name = schema.named(table_name)?;
        Ok(Self::with_name(schema, name))
    }

    fn with_name(schema: &'static TableSchema, name: TableName) -> Self {
        let data_directory = Path::new(DATA_ROOT).join(name.as_str());
        Self {
            schema,
            name,
            data_directory,
        }
    }

    /// Override the directory the bulk loader reads this table's files from.
    pub fn with_data_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.data_directory = directory.into();
        self
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    pub fn name(&self) -> &TableName {
        &self.name
    }

    pub fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    pub fn record_info(&self) -> String {
        self.schema.record_info()
    }

    pub fn record_template(&self) -> MapRecord {
        self.schema.record_template()
    }

    pub fn create_table_sql(&self) -> String {
        self.schema.create_table_sql(&self.name)
    }

    pub fn insert_sql(&self) -> String {
        self.schema.insert_sql(&self.name)
    }

    pub fn validate_record<R: Record + ?Sized>(&self, record: &R) -> Result<(), DbError> {
        self.schema.validate_record(record)?;
        Ok(())
    }

    pub fn preprocess_record<R: Record + ?Sized>(
        &self,
        record: &R,
    ) -> Result<InsertionTuple, DbError> {
        Ok(self.schema.preprocess_record(record)?)
    }

    /// Ensure the table exists on `conn` and move to the writable state.
    ///
    /// # Errors
    /// - [`crate::SchemaError`] if the table cannot be created or an
    ///   incompatible table of the same name exists.
    pub async fn create_table(self, conn: &mut DbConnection) -> Result<Table, DbError> {
        tables::ensure_table(conn, self.schema, &self.name).await?;
        Ok(Table { descriptor: self })
    }
}

/// A table known to exist on the connection it was created against.
#[derive(Debug, Clone)]
pub struct Table {
    descriptor: TableDescriptor,
}

impl Table {
    /// Re-issue the create statement; a no-op for an existing table.
    pub async fn create_table(&self, conn: &mut DbConnection) -> Result<(), DbError> {
        tables::ensure_table(conn, self.schema, &self.name).await
    }

    /// Validate, preprocess and insert one record.
    ///
    /// Nothing is written unless validation and preprocessing both succeed.
    ///
    /// # Errors
    /// - [`DbError::Validation`] when a present field has the wrong kind.
    /// - [`DbError::Record`] when a required field is missing.
    /// - [`DbError::DuplicateKey`] when the key is already stored.
    pub async fn insert_record<R: Record + ?Sized>(
        &self,
        conn: &mut DbConnection,
        record: &R,
    ) -> Result<(), DbError> {
        self.validate_record(record)?;
        let tuple = self.preprocess_record(record)?;
        debug!(table = %self.name, values = tuple.len(), "Record preprocessed");
        records::insert_tuple(conn, self.schema, &self.name, tuple).await
    }

    pub async fn fetch_records(
        &self,
        conn: &mut DbConnection,
    ) -> Result<Vec<Vec<FieldValue>>, DbError> {
        records::fetch_records(conn, self.schema, &self.name).await
    }

    pub async fn count_records(&self, conn: &mut DbConnection) -> Result<i64, DbError> {
        records::count_records(conn, self.schema, &self.name).await
    }
}

impl Deref for Table {
    type Target = TableDescriptor;

    fn deref(&self) -> &Self::Target {
        &self.descriptor
    }
}
