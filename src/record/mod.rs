pub mod error;
pub mod value;

use std::borrow::Cow;

pub use error::{ScanError, ValueError};
use once_cell::sync::OnceCell;
pub use value::{FromValue, ToValue, Value};

use crate::naming;

/// Bookkeeping role a field plays in generated statements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Plain,
    /// Assigned by the storage engine, never written.
    AutoIncrement,
    /// Written on insert only, stamped with the current time.
    CreatedAt,
    /// Written on update only, stamped with the current time.
    UpdatedAt,
}

impl Role {
    pub fn is_stamped(self) -> bool {
        matches!(self, Role::CreatedAt | Role::UpdatedAt)
    }
}

/// Mapping metadata of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    declared_name: &'static str,
    column_name: &'static str,
    role: Role,
    primary_key: bool,
}

impl FieldDescriptor {
    pub const fn new(
        declared_name: &'static str,
        column_name: &'static str,
        role: Role,
        primary_key: bool,
    ) -> Self {
        Self {
            declared_name,
            column_name,
            role,
            primary_key,
        }
    }

    pub fn declared_name(&self) -> &'static str {
        self.declared_name
    }

    pub fn column_name(&self) -> &'static str {
        self.column_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the field is explicitly marked as primary key.
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub(crate) fn in_insert(&self) -> bool {
        matches!(self.role, Role::Plain | Role::CreatedAt)
    }

    pub(crate) fn in_update(&self) -> bool {
        matches!(self.role, Role::Plain | Role::UpdatedAt)
    }
}

/// Mapping metadata of a record type, built once per type.
///
/// Usually emitted as a `static` by `#[derive(Record)]`. The pluralized
/// default table name and the resolved primary key are computed on first use.
#[derive(Debug)]
pub struct RecordDescriptor {
    type_name: &'static str,
    table: Option<&'static str>,
    fields: &'static [FieldDescriptor],
    default_table: OnceCell<String>,
    pub(crate) key_index: OnceCell<Option<usize>>,
}

impl RecordDescriptor {
    pub const fn new(
        type_name: &'static str,
        table: Option<&'static str>,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            type_name,
            table,
            fields,
            default_table: OnceCell::new(),
            key_index: OnceCell::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The static table-name override, or the pluralized type name.
    pub fn table_name(&self) -> &str {
        match self.table {
            Some(table) => table,
            None => self
                .default_table
                .get_or_init(|| naming::plural(self.type_name)),
        }
    }

    /// Column names of every field, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(FieldDescriptor::column_name)
    }
}

/// Instance-level table naming, opted into with `#[record(table_name)]`.
pub trait TableName {
    fn table_name(&self) -> Cow<'static, str>;
}

/// A positional result row, one value per selected column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn into_values(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A struct mapped onto one table row. Implemented by `#[derive(Record)]`.
pub trait Record {
    /// Returns the static mapping metadata of this type.
    fn descriptor() -> &'static RecordDescriptor;

    /// Returns the table the record lives in.
    fn table(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::descriptor().table_name())
    }

    /// Returns the current value of the field at `index`, in declaration order.
    fn value(&self, index: usize) -> Option<Value>;

    /// Overwrites the field at `index` with `value`.
    fn assign(&mut self, index: usize, value: Value) -> Result<(), ValueError>;

    /// Returns every field value in declaration order.
    fn values(&self) -> Vec<Value> {
        (0..Self::descriptor().len())
            .filter_map(|index| self.value(index))
            .collect()
    }

    /// Writes a row selected with every column back into the record, positionally.
    fn scan(&mut self, row: Row) -> Result<(), ScanError> {
        let descriptor = Self::descriptor();
        if row.len() != descriptor.len() {
            return Err(ScanError::ColumnCount {
                expected: descriptor.len(),
                found: row.len(),
            });
        }
        for (index, (field, value)) in descriptor
            .fields()
            .iter()
            .zip(row.into_values())
            .enumerate()
        {
            self.assign(index, value).map_err(|source| ScanError::Field {
                column: field.column_name(),
                source,
            })?;
        }
        Ok(())
    }
}
