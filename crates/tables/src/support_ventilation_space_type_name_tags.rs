//! Controlled vocabulary of ventilation space type names.

use db::{DbError, TableDescriptor};
use schema::{ColumnSpec, PrimaryKey, TableIdentity, TableSchema};

pub const TABLE_NAME: &str = "support_ventilation_space_type_name_tags";

pub static SCHEMA: TableSchema = TableSchema {
    identity: TableIdentity::Fixed(TABLE_NAME),
    primary_key: PrimaryKey::Natural("ventilation_space_type_name"),
    columns: &[ColumnSpec::text("ventilation_space_type_name").required()],
    foreign_keys: &[],
    description: "Ventilation space type name tags.",
};

pub fn table() -> Result<TableDescriptor, DbError> {
    TableDescriptor::new(&SCHEMA)
}
