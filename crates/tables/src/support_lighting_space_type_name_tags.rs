//! Controlled vocabulary of lighting space type names, referenced by
//! `level_2_lighting_space_types`.

use db::{DbError, TableDescriptor};
use schema::{ColumnSpec, PrimaryKey, TableIdentity, TableSchema};

pub const TABLE_NAME: &str = "support_lighting_space_type_name_tags";

pub static SCHEMA: TableSchema = TableSchema {
    identity: TableIdentity::Fixed(TABLE_NAME),
    primary_key: PrimaryKey::Natural("lighting_space_type_name"),
    columns: &[ColumnSpec::text("lighting_space_type_name").required()],
    foreign_keys: &[],
    description: "Lighting space type name tags.",
};

pub fn table() -> Result<TableDescriptor, DbError> {
    TableDescriptor::new(&SCHEMA)
}
