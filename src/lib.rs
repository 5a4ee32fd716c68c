#![deny(missing_debug_implementations)]
//! Map plain Rust structs to single-record SQL statements.
//!
//! `#[derive(Record)]` describes a struct once: its table, its columns in
//! declaration order, its primary key and which fields are bookkeeping
//! timestamps. [`QueryBuilder`] turns any record into an `INSERT`, `UPDATE`,
//! `DELETE` or `SELECT`-by-key statement with `?` placeholders, and
//! [`Database`] runs those statements through a caller supplied
//! [`Connection`].
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use rowmap::{QueryBuilder, Record};
//!
//! #[derive(Record, Default)]
//! #[record(table = "objects")]
//! struct Object {
//!     #[record(primary_key, auto_increment)]
//!     id: u64,
//!     name: String,
//!     #[record(created_at)]
//!     created_at: Option<DateTime<Utc>>,
//!     #[record(updated_at)]
//!     updated_at: Option<DateTime<Utc>>,
//! }
//!
//! let object = Object {
//!     name: "Test Object".to_string(),
//!     ..Default::default()
//! };
//! let statement = QueryBuilder::default().build_insert(&object).unwrap();
//! assert_eq!(
//!     statement.sql(),
//!     "INSERT INTO objects (name,created_at) VALUES (?,?)"
//! );
//! ```

extern crate self as rowmap;

/// Executes built statements through a [`Connection`].
pub mod db;

/// Default table naming.
pub mod naming;

mod observability;

/// Builder options.
pub mod option;

/// Statement assembly and primary-key resolution.
pub mod query;

/// Record descriptors, values and the [`Record`] trait.
pub mod record;

pub use rowmap_macros::Record;

pub use crate::{
    db::{Connection, Database, DbError},
    option::{Clock, MapperOption},
    query::{BuildError, QueryBuilder, Statement},
    record::{
        FieldDescriptor, FromValue, Record, RecordDescriptor, Role, Row, ScanError, TableName,
        ToValue, Value, ValueError,
    },
};
