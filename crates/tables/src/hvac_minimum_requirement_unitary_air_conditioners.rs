//! Minimum efficiency requirements for unitary air conditioners.
//!
//! One table per standard edition, so the name is chosen by the caller.

use std::path::PathBuf;

use db::{DbError, TableDescriptor};
use schema::{ColumnSpec, PrimaryKey, TableIdentity, TableSchema};

pub static SCHEMA: TableSchema = TableSchema {
    identity: TableIdentity::Parameterized {
        default_name: "hvac_minimum_requirement_unitary_air_conditioners",
    },
    primary_key: PrimaryKey::Surrogate,
    columns: &[
        ColumnSpec::text("template").required().check_text(),
        ColumnSpec::text("cooling_type").required().check_text(),
        ColumnSpec::text("heating_type").required(),
        ColumnSpec::text("subcategory").required(),
        ColumnSpec::numeric("minimum_capacity").check_numeric(),
        ColumnSpec::numeric("maximum_capacity").check_numeric(),
        ColumnSpec::text("start_date").check_text(),
        ColumnSpec::text("end_date").check_text(),
        ColumnSpec::numeric("minimum_seasonal_efficiency").check_numeric(),
        ColumnSpec::numeric("minimum_energy_efficiency_ratio").check_numeric(),
        ColumnSpec::numeric("minimum_integrated_part_load_value").check_numeric(),
        ColumnSpec::numeric("minimum_integrated_energy_efficiency_ratio").check_numeric(),
        ColumnSpec::numeric("ptac_eer_coefficient_1").check_numeric(),
        ColumnSpec::numeric("ptac_eer_coefficient_2").check_numeric(),
        ColumnSpec::numeric("minimum_scop").check_numeric(),
        ColumnSpec::text("cool_cap_ft").check_text(),
        ColumnSpec::text("cool_cap_fflow").check_text(),
        ColumnSpec::text("cool_eir_ft").check_text(),
        ColumnSpec::text("cool_eir_fflow").check_text(),
        ColumnSpec::text("cool_plf_fplr").check_text(),
        ColumnSpec::text("annotation"),
    ],
    foreign_keys: &[],
    description: "Unitary air conditioner minimum efficiency requirements.",
};

/// Instantiate the table under `table_name`, reading source files from
/// `data_directory`.
pub fn table(
    table_name: &str,
    data_directory: impl Into<PathBuf>,
) -> Result<TableDescriptor, DbError> {
    Ok(TableDescriptor::named(&SCHEMA, table_name)?.with_data_directory(data_directory))
}
