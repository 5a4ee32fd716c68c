//! Single-record statement assembly.
//!
//! Every statement uses unquoted identifiers and `?` positional placeholders,
//! and its arguments line up 1:1 with the placeholders.

pub mod error;
pub mod key;

use std::fmt;

use chrono::{DateTime, Utc};
pub use error::BuildError;

use crate::{
    observability::log_debug,
    option::MapperOption,
    record::{FieldDescriptor, Record, RecordDescriptor, Value},
};

/// SQL text plus its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    args: Vec<Value>,
    stamps: Vec<(usize, Value)>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Fields whose value was replaced by the current time, as `(field index, value)`.
    pub fn stamps(&self) -> &[(usize, Value)] {
        &self.stamps
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Builds INSERT, UPDATE, DELETE and SELECT-by-key statements from records.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    option: MapperOption,
}

struct Columns {
    names: Vec<&'static str>,
    args: Vec<Value>,
    stamps: Vec<(usize, Value)>,
}

impl QueryBuilder {
    pub fn new(option: MapperOption) -> Self {
        QueryBuilder { option }
    }

    pub fn option(&self) -> &MapperOption {
        &self.option
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`.
    ///
    /// Auto-increment and `updated_at` fields are left out, `created_at`
    /// fields are stamped. A record with no insertable column yields
    /// `INSERT INTO <table> () VALUES ()`, which inserts a row of defaults.
    pub fn build_insert<R: Record>(&self, record: &R) -> Result<Statement, BuildError> {
        let descriptor = R::descriptor();
        let table = record.table();
        let columns = self.columns(record, descriptor, FieldDescriptor::in_insert)?;

        let placeholders = vec!["?"; columns.names.len()].join(",");
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({placeholders})",
            columns.names.join(",")
        );

        Ok(finish("insert", &table, sql, columns.args, columns.stamps))
    }

    /// `UPDATE <table> SET <column>=?,... WHERE <key>=?`.
    ///
    /// Auto-increment and `created_at` fields are left out, `updated_at`
    /// fields are stamped. The key value is the last argument.
    pub fn build_update<R: Record>(&self, record: &R) -> Result<Statement, BuildError> {
        let descriptor = R::descriptor();
        let (key_index, key) = descriptor.primary_key()?;
        let table = record.table();
        let mut columns = self.columns(record, descriptor, FieldDescriptor::in_update)?;
        if columns.names.is_empty() {
            return Err(BuildError::NoColumns {
                record: descriptor.type_name(),
            });
        }

        let assignments = columns
            .names
            .iter()
            .map(|name| format!("{name}=?"))
            .collect::<Vec<_>>()
            .join(",");
        let sql = format!(
            "UPDATE {table} SET {assignments} WHERE {}=?",
            key.column_name()
        );
        columns.args.push(value_at(record, descriptor, key_index)?);

        Ok(finish("update", &table, sql, columns.args, columns.stamps))
    }

    /// `DELETE FROM <table> WHERE <key>=?`.
    pub fn build_delete<R: Record>(&self, record: &R) -> Result<Statement, BuildError> {
        let descriptor = R::descriptor();
        let (key_index, key) = descriptor.primary_key()?;
        let table = record.table();

        let sql = format!("DELETE FROM {table} WHERE {}=?", key.column_name());
        let args = vec![value_at(record, descriptor, key_index)?];

        Ok(finish("delete", &table, sql, args, Vec::new()))
    }

    /// `SELECT (<every column>) FROM <table> WHERE <key>=?`.
    ///
    /// Columns follow declaration order, which is the order
    /// [`Record::scan`] expects the row in.
    pub fn build_select<R: Record>(&self, record: &R) -> Result<Statement, BuildError> {
        let descriptor = R::descriptor();
        let (key_index, key) = descriptor.primary_key()?;
        let table = record.table();

        let sql = format!(
            "SELECT ({}) FROM {table} WHERE {}=?",
            descriptor.column_names().collect::<Vec<_>>().join(","),
            key.column_name()
        );
        let args = vec![value_at(record, descriptor, key_index)?];

        Ok(finish("select", &table, sql, args, Vec::new()))
    }

    fn columns<R: Record>(
        &self,
        record: &R,
        descriptor: &RecordDescriptor,
        include: fn(&FieldDescriptor) -> bool,
    ) -> Result<Columns, BuildError> {
        let mut now: Option<DateTime<Utc>> = None;
        let mut columns = Columns {
            names: Vec::with_capacity(descriptor.len()),
            args: Vec::with_capacity(descriptor.len()),
            stamps: Vec::new(),
        };

        for (index, field) in descriptor.fields().iter().enumerate() {
            if !include(field) {
                continue;
            }
            let value = if field.role().is_stamped() {
                let stamp = Value::Timestamp(*now.get_or_insert_with(self.option.clock));
                columns.stamps.push((index, stamp.clone()));
                stamp
            } else {
                value_at(record, descriptor, index)?
            };
            columns.names.push(field.column_name());
            columns.args.push(value);
        }
        Ok(columns)
    }
}

fn value_at<R: Record>(
    record: &R,
    descriptor: &RecordDescriptor,
    index: usize,
) -> Result<Value, BuildError> {
    record.value(index).ok_or(BuildError::MissingValue {
        record: descriptor.type_name(),
        index,
    })
}

fn finish(
    kind: &'static str,
    table: &str,
    sql: String,
    args: Vec<Value>,
    stamps: Vec<(usize, Value)>,
) -> Statement {
    log_debug!(
        component = "query",
        event = "statement_built",
        kind,
        table,
        args = args.len(),
    );
    Statement { sql, args, stamps }
}
