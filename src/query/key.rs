use crate::{
    observability::log_trace,
    query::BuildError,
    record::{FieldDescriptor, RecordDescriptor},
};

/// Column names treated as primary key when no field is marked, in order of precedence.
const CONVENTIONAL_KEYS: [&str; 2] = ["Id", "id"];

impl RecordDescriptor {
    /// Resolves the primary key: the field marked `#[record(primary_key)]`,
    /// else the column named exactly `Id`, else exactly `id`.
    ///
    /// The result is cached for the lifetime of the descriptor.
    pub fn primary_key(&self) -> Result<(usize, &'static FieldDescriptor), BuildError> {
        let index = *self.key_index.get_or_init(|| locate(self));
        let index = index.ok_or(BuildError::MissingPrimaryKey {
            record: self.type_name(),
        })?;

        Ok((index, &self.fields()[index]))
    }
}

fn locate(descriptor: &RecordDescriptor) -> Option<usize> {
    let fields = descriptor.fields();
    if let Some(index) = fields.iter().position(FieldDescriptor::is_primary_key) {
        return Some(index);
    }

    let index = CONVENTIONAL_KEYS.iter().find_map(|name| {
        fields
            .iter()
            .position(|field| field.column_name() == *name)
    })?;
    log_trace!(
        component = "query",
        event = "primary_key_by_convention",
        record = descriptor.type_name(),
        column = fields[index].column_name(),
    );
    Some(index)
}
