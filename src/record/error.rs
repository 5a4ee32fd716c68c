use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("expected {expected} value, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Null value not allowed for {expected}")]
    NullNotAllowed { expected: &'static str },
    #[error("value {value} out of range for {expected}")]
    OutOfRange {
        expected: &'static str,
        value: String,
    },
    #[error("field index {index} out of range for record with {len} fields")]
    NoSuchField { index: usize, len: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("row has {found} columns, record expects {expected}")]
    ColumnCount { expected: usize, found: usize },
    #[error("column `{column}`: {source}")]
    Field {
        column: &'static str,
        #[source]
        source: ValueError,
    },
}
