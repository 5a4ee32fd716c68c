use thiserror::Error;

/// Error returned while turning a record into a statement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error(
        "unable to identify primary key of `{record}` (struct is missing a \
         #[record(primary_key)] attribute and has no `Id` or `id` column)"
    )]
    MissingPrimaryKey { record: &'static str },
    #[error("`{record}` has no columns to update")]
    NoColumns { record: &'static str },
    #[error("`{record}` returned no value for field {index}")]
    MissingValue { record: &'static str, index: usize },
}
