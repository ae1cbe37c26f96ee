//! ASHRAE 62.1 ventilation rates per space type.

use std::path::PathBuf;

use db::{DbError, TableDescriptor};
use schema::{ColumnSpec, PrimaryKey, TableIdentity, TableSchema};

pub static SCHEMA: TableSchema = TableSchema {
    identity: TableIdentity::Parameterized {
        default_name: "level_3_ventilation_62_1_definition",
    },
    primary_key: PrimaryKey::Surrogate,
    columns: &[
        ColumnSpec::text("ventilation_primary_space_type").required(),
        ColumnSpec::text("ventilation_secondary_space_type").required(),
        ColumnSpec::numeric("ventilation_per_person").check_numeric(),
        ColumnSpec::text("ventilation_per_person_unit").defaults_to("cfm/person"),
        ColumnSpec::numeric("ventilation_per_area").check_numeric(),
        ColumnSpec::text("ventilation_per_area_unit").defaults_to("cfm/ft2"),
        ColumnSpec::numeric("occupancy_per_area").check_numeric(),
        ColumnSpec::text("occupancy_per_area_unit").defaults_to("ppl/1000 ft2"),
        ColumnSpec::integer("air_class"),
        ColumnSpec::text("os"),
        ColumnSpec::text("annotation"),
    ],
    foreign_keys: &[],
    description: "Ventilation rate procedure definitions (ASHRAE 62.1).",
};

pub fn table(
    table_name: &str,
    data_directory: impl Into<PathBuf>,
) -> Result<TableDescriptor, DbError> {
    Ok(TableDescriptor::named(&SCHEMA, table_name)?.with_data_directory(data_directory))
}
