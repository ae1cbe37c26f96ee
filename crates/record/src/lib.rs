//! `record` crate — loosely-typed input records and field resolution.
//!
//! Callers hand table descriptors either a key/value mapping ([`MapRecord`])
//! or a structured object whose fields are read as attributes
//! ([`AttributeRecord`]). Both implement [`Record`], so the rest of the
//! workspace never cares which representation a bulk loader chose.

pub mod attribute;
pub mod error;
pub mod map;
pub mod resolve;
pub mod traits;
pub mod value;

pub use attribute::AttributeRecord;
pub use error::RecordError;
pub use map::MapRecord;
pub use resolve::resolve_field;
pub use traits::Record;
pub use value::{is_numeric, FieldValue};
