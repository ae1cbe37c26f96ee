//! Repository functions — one function per database operation.
//!
//! Every function takes a `&mut DbConnection`, a schema and a table name and
//! returns a `Result<T, DbError>`. No validation or defaulting happens here;
//! callers hand over finished insertion tuples.

pub mod records;
pub mod tables;
