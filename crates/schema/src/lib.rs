//! `schema` crate — declarative table descriptions and record marshalling.
//!
//! A [`TableSchema`] is plain data: an ordered column list, a key strategy
//! and foreign keys. The create and insert statements, the record template,
//! the record-info text, validation and the insertion tuple are all derived
//! from that one column list, so column order cannot drift between them.
//! No I/O happens here; see the `db` crate.

pub mod column;
pub mod error;
pub mod name;
pub mod preprocess;
pub mod statements;
pub mod table;
pub mod template;
pub mod validate;

pub use column::{ColumnSpec, FieldCheck, SqlType, TemplateValue};
pub use error::ValidationError;
pub use name::TableName;
pub use preprocess::InsertionTuple;
pub use table::{ForeignKey, PrimaryKey, StoredColumn, TableIdentity, TableSchema};
