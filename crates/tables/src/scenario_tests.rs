//! End-to-end scenarios for the concrete standards tables.

use db::{connect, DbConfig, DbConnection, DbError};
use record::{AttributeRecord, FieldValue, MapRecord, RecordError};
use schema::{SqlType, ValidationError};
use serde::Serialize;
use serde_json::json;

use crate::{
    create_all, find, hvac_minimum_requirement_unitary_air_conditioners as unitary,
    level_2_lighting_space_types as lighting, level_3_ventilation_62_1_definition as vent,
    registry, support_lighting_space_type_name_tags as lighting_tags,
    support_ventilation_space_type_name_tags as vent_tags, SCHEMAS,
};

async fn memory() -> DbConnection {
    connect(&DbConfig::default()).await.expect("in-memory sqlite")
}

/// Stored values compare equal to inputs modulo numeric representation:
/// NUMERIC affinity turns `0.0` into `0` and `"12.5"` into `12.5`.
fn assert_stored_eq(sql_type: SqlType, stored: &FieldValue, input: &FieldValue, column: &str) {
    match sql_type {
        SqlType::Numeric | SqlType::Integer => {
            assert_eq!(stored.as_f64(), input.as_f64(), "column {column}");
        }
        SqlType::Text => assert_eq!(stored, input, "column {column}"),
    }
}

// ============================================================
// Tuple shape (no DB required)
// ============================================================

#[test]
fn every_schema_preprocesses_to_its_placeholder_count() {
    for schema in SCHEMAS {
        let template = schema.record_template();
        let attrs = AttributeRecord::from_object(&serde_json::Value::Object(
            template
                .iter()
                .map(|(k, v)| (k.to_owned(), serde_json::to_value(v).unwrap()))
                .collect(),
        ))
        .unwrap();

        let from_map = schema.preprocess_record(&template).unwrap();
        let from_attrs = schema.preprocess_record(&attrs).unwrap();

        let name = schema.default_name().unwrap();
        let insert = schema.insert_sql(&name);
        assert_eq!(from_map.len(), insert.matches('?').count(), "{name}");
        assert_eq!(from_map.len(), schema.columns.len(), "{name}");
        assert_eq!(from_map, from_attrs, "{name}");
    }
}

#[test]
fn registry_covers_every_schema_once() {
    let names: Vec<String> = registry()
        .unwrap()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    assert_eq!(names.len(), SCHEMAS.len());
    for name in &names {
        assert!(find(name).is_some(), "{name} not found");
    }
    assert!(find("no_such_table").is_none());
}

// ============================================================
// Unitary air conditioners
// ============================================================

#[tokio::test]
async fn sparse_unitary_record_gets_template_defaults() {
    let mut conn = memory().await;
    let table = unitary::table("unitary_ac", "database_files/unitary_ac")
        .unwrap()
        .create_table(&mut conn)
        .await
        .unwrap();

    let record = MapRecord::try_from(json!({
        "template": "90.1-2013",
        "cooling_type": "AirCooled",
        "heating_type": "None",
        "subcategory": "Split",
        "minimum_capacity": 0
    }))
    .unwrap();
    table.insert_record(&mut conn, &record).await.unwrap();

    let rows = table.fetch_records(&mut conn).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row[0], FieldValue::from("90.1-2013"));
    assert_eq!(row[3], FieldValue::from("Split"));

    for (column, stored) in unitary::SCHEMA.columns.iter().zip(row).skip(4) {
        match column.sql_type {
            SqlType::Numeric => assert_eq!(stored.as_f64(), Some(0.0), "{}", column.name),
            _ => assert_eq!(stored, &FieldValue::from(""), "{}", column.name),
        }
    }
}

#[tokio::test]
async fn full_unitary_record_round_trips() {
    let mut conn = memory().await;
    let table = unitary::table("unitary_ac", "database_files/unitary_ac")
        .unwrap()
        .create_table(&mut conn)
        .await
        .unwrap();

    let record = MapRecord::try_from(json!({
        "template": "90.1-2019",
        "cooling_type": "AirCooled",
        "heating_type": "Electric Resistance or None",
        "subcategory": "Single Package",
        "minimum_capacity": 65000,
        "maximum_capacity": "134999",
        "start_date": "1919-09-09T00:00:00",
        "end_date": "2999-09-09T00:00:00",
        "minimum_seasonal_efficiency": 14.0,
        "minimum_energy_efficiency_ratio": "11.2",
        "minimum_integrated_part_load_value": 0,
        "minimum_integrated_energy_efficiency_ratio": 14.8,
        "ptac_eer_coefficient_1": 0,
        "ptac_eer_coefficient_2": 0,
        "minimum_scop": 0,
        "cool_cap_ft": "RTU-Cap-fT",
        "cool_cap_fflow": "RTU-Cap-fFF",
        "cool_eir_ft": "RTU-EIR-fT",
        "cool_eir_fflow": "RTU-EIR-fFF",
        "cool_plf_fplr": "RTU-PLF-fPLR",
        "annotation": "Table 6.8.1-1"
    }))
    .unwrap();
    table.insert_record(&mut conn, &record).await.unwrap();

    let rows = table.fetch_records(&mut conn).await.unwrap();
    for (column, stored) in unitary::SCHEMA.columns.iter().zip(&rows[0]) {
        let input = record.get(column.name).unwrap();
        assert_stored_eq(column.sql_type, stored, input, column.name);
    }
}

#[tokio::test]
async fn non_numeric_capacity_is_rejected() {
    let mut conn = memory().await;
    let table = unitary::table("unitary_ac", "database_files/unitary_ac")
        .unwrap()
        .create_table(&mut conn)
        .await
        .unwrap();

    let record = MapRecord::new()
        .with("template", "90.1-2013")
        .with("cooling_type", "AirCooled")
        .with("heating_type", "None")
        .with("subcategory", "Split")
        .with("minimum_capacity", "abc");

    let err = table.validate_record(&record).unwrap_err();
    assert!(matches!(
        err,
        DbError::Validation(ValidationError::InvalidFieldType { ref field, .. }) if field == "minimum_capacity"
    ));
    assert!(table.insert_record(&mut conn, &record).await.is_err());
    assert_eq!(table.count_records(&mut conn).await.unwrap(), 0);
}

#[tokio::test]
async fn missing_subcategory_is_reported_by_preprocessing() {
    let mut conn = memory().await;
    let table = unitary::table("unitary_ac", "database_files/unitary_ac")
        .unwrap()
        .create_table(&mut conn)
        .await
        .unwrap();

    let record = MapRecord::new()
        .with("template", "90.1-2013")
        .with("cooling_type", "AirCooled")
        .with("heating_type", "None");

    // Validation does not look for missing fields.
    assert!(table.validate_record(&record).is_ok());

    let err = table.insert_record(&mut conn, &record).await.unwrap_err();
    assert!(matches!(
        err,
        DbError::Record(RecordError::MissingField { ref field, .. }) if field == "subcategory"
    ));
    assert_eq!(table.count_records(&mut conn).await.unwrap(), 0);
}

// ============================================================
// Ventilation 62.1
// ============================================================

#[tokio::test]
async fn ventilation_definition_accepts_objects_and_fills_units() {
    #[derive(Serialize)]
    struct VentRate {
        ventilation_primary_space_type: &'static str,
        ventilation_secondary_space_type: &'static str,
        ventilation_per_person: f64,
        ventilation_per_area: f64,
        occupancy_per_area: &'static str,
        air_class: i64,
    }

    let mut conn = memory().await;
    let table = vent::table("ventilation_62_1_2019", "database_files/ventilation_62_1_2019")
        .unwrap()
        .create_table(&mut conn)
        .await
        .unwrap();

    let record = AttributeRecord::from_object(&VentRate {
        ventilation_primary_space_type: "Office Buildings",
        ventilation_secondary_space_type: "Office space",
        ventilation_per_person: 5.0,
        ventilation_per_area: 0.06,
        occupancy_per_area: "5",
        air_class: 1,
    })
    .unwrap();
    table.insert_record(&mut conn, &record).await.unwrap();

    let rows = table.fetch_records(&mut conn).await.unwrap();
    let row = &rows[0];
    assert_eq!(row[0], FieldValue::from("Office Buildings"));
    assert_eq!(row[2].as_f64(), Some(5.0));
    assert_eq!(row[3], FieldValue::from("cfm/person"));
    assert_eq!(row[4].as_f64(), Some(0.06));
    assert_eq!(row[5], FieldValue::from("cfm/ft2"));
    assert_eq!(row[6].as_f64(), Some(5.0));
    assert_eq!(row[7], FieldValue::from("ppl/1000 ft2"));
    assert_eq!(row[8], FieldValue::Integer(1));
    assert_eq!(row[10], FieldValue::from(""));
}

#[test]
fn ventilation_occupancy_must_be_numeric() {
    let table = vent::table("ventilation_62_1", "database_files/ventilation_62_1").unwrap();
    let record = MapRecord::new()
        .with("ventilation_primary_space_type", "Retail")
        .with("ventilation_secondary_space_type", "Sales")
        .with("occupancy_per_area", "fifteen");
    assert!(matches!(
        table.validate_record(&record),
        Err(DbError::Validation(ValidationError::InvalidFieldType { ref field, .. })) if field == "occupancy_per_area"
    ));
}

// ============================================================
// Tag tables
// ============================================================

#[tokio::test]
async fn duplicate_ventilation_tag_is_rejected() {
    let mut conn = memory().await;
    let tags = vent_tags::table()
        .unwrap()
        .create_table(&mut conn)
        .await
        .unwrap();

    let office = MapRecord::new().with("ventilation_space_type_name", "Office");
    tags.insert_record(&mut conn, &office).await.unwrap();

    let err = tags.insert_record(&mut conn, &office).await.unwrap_err();
    assert!(matches!(
        err,
        DbError::DuplicateKey { ref table, ref key }
            if table == vent_tags::TABLE_NAME && key == "\"Office\""
    ));
    assert_eq!(tags.count_records(&mut conn).await.unwrap(), 1);
}

#[tokio::test]
async fn lighting_space_type_links_to_its_tag() {
    let mut conn = connect(&DbConfig::default().with_foreign_keys(true))
        .await
        .unwrap();
    let tables = create_all(&mut conn).await.unwrap();
    assert_eq!(tables.len(), SCHEMAS.len());

    let tags = lighting_tags::table().unwrap().create_table(&mut conn).await.unwrap();
    tags.insert_record(
        &mut conn,
        &MapRecord::new().with("lighting_space_type_name", "Office - Enclosed"),
    )
    .await
    .unwrap();

    let space_types = lighting::table().unwrap().create_table(&mut conn).await.unwrap();
    space_types
        .insert_record(
            &mut conn,
            &MapRecord::new()
                .with("lighting_space_type_name", "Office - Enclosed")
                .with("level_3_lighting_definition_table", "level_3_lighting_90_1_2019")
                .with("level_3_lighting_definition_id", 12),
        )
        .await
        .unwrap();

    let rows = space_types.fetch_records(&mut conn).await.unwrap();
    assert_eq!(
        rows,
        vec![vec![
            FieldValue::from("Office - Enclosed"),
            FieldValue::from("level_3_lighting_90_1_2019"),
            FieldValue::Integer(12),
        ]]
    );

    let orphan = MapRecord::new()
        .with("lighting_space_type_name", "Atrium")
        .with("level_3_lighting_definition_table", "level_3_lighting_90_1_2019")
        .with("level_3_lighting_definition_id", 3);
    assert!(matches!(
        space_types.insert_record(&mut conn, &orphan).await,
        Err(DbError::Sqlx(_))
    ));
}

#[tokio::test]
async fn create_all_twice_is_harmless() {
    let mut conn = memory().await;
    create_all(&mut conn).await.unwrap();
    create_all(&mut conn).await.unwrap();

    let count = count_existing_tables(&mut conn).await;
    assert_eq!(count, SCHEMAS.len() as i64);
}

async fn count_existing_tables(conn: &mut DbConnection) -> i64 {
    let mut total = 0;
    for descriptor in registry().unwrap() {
        let exists = db::repository::tables::table_exists(conn, descriptor.name())
            .await
            .unwrap();
        total += i64::from(exists);
    }
    total
}
