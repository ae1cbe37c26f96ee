//! `tables` crate — the standards tables, declared as data.
//!
//! Each module holds one [`TableSchema`] and a constructor. Tables whose
//! name varies by standard edition take a name and data directory; the rest
//! live under a fixed name.

pub mod hvac_minimum_requirement_unitary_air_conditioners;
pub mod level_2_lighting_space_types;
pub mod level_3_ventilation_62_1_definition;
pub mod support_lighting_space_type_name_tags;
pub mod support_ventilation_space_type_name_tags;

use db::{DbConnection, DbError, Table, TableDescriptor};
use schema::TableSchema;
use tracing::info;

/// Every schema, tag tables ahead of the tables that reference them.
pub static SCHEMAS: &[&TableSchema] = &[
    &support_lighting_space_type_name_tags::SCHEMA,
    &support_ventilation_space_type_name_tags::SCHEMA,
    &level_2_lighting_space_types::SCHEMA,
    &level_3_ventilation_62_1_definition::SCHEMA,
    &hvac_minimum_requirement_unitary_air_conditioners::SCHEMA,
];

/// Look a schema up by its fixed or default table name.
pub fn find(table_name: &str) -> Option<&'static TableSchema> {
    SCHEMAS.iter().copied().find(|schema| {
        schema
            .default_name()
            .is_ok_and(|name| name.as_str() == table_name)
    })
}

/// One descriptor per schema under its fixed or default name.
pub fn registry() -> Result<Vec<TableDescriptor>, DbError> {
    SCHEMAS.iter().copied().map(TableDescriptor::new).collect()
}

/// Ensure every registered table exists on `conn`.
pub async fn create_all(conn: &mut DbConnection) -> Result<Vec<Table>, DbError> {
    let mut created = Vec::with_capacity(SCHEMAS.len());
    for descriptor in registry()? {
        created.push(descriptor.create_table(conn).await?);
    }
    info!("Ensured {} standards tables", created.len());
    Ok(created)
}

#[cfg(test)]
mod scenario_tests;
