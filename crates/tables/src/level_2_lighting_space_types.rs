//! Lighting space types and the level-3 definition each one points at.

use db::{DbError, TableDescriptor};
use schema::{ColumnSpec, ForeignKey, PrimaryKey, TableIdentity, TableSchema};

use crate::support_lighting_space_type_name_tags;

pub const TABLE_NAME: &str = "level_2_lighting_space_types";

pub static SCHEMA: TableSchema = TableSchema {
    identity: TableIdentity::Fixed(TABLE_NAME),
    primary_key: PrimaryKey::Surrogate,
    columns: &[
        ColumnSpec::text("lighting_space_type_name").required(),
        ColumnSpec::text("level_3_lighting_definition_table").required(),
        ColumnSpec::integer("level_3_lighting_definition_id")
            .required()
            .note("id from the level_3_lighting_definition index"),
    ],
    foreign_keys: &[ForeignKey {
        column: "lighting_space_type_name",
        references_table: support_lighting_space_type_name_tags::TABLE_NAME,
        references_column: "lighting_space_type_name",
    }],
    description: "Lighting space types mapped to their level-3 lighting definitions.",
};

pub fn table() -> Result<TableDescriptor, DbError> {
    TableDescriptor::new(&SCHEMA)
}
