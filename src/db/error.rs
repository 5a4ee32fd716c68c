use std::error::Error;

use crate::{
    query::BuildError,
    record::{ScanError, ValueError},
};

/// Error returned for Database
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The statement could not be built, nothing was executed.
    #[error("build error: {0}")]
    Build(#[from] BuildError),
    /// The connection rejected the statement.
    #[error("failed to execute `{sql}`: {source}")]
    Execution {
        sql: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The selected row does not fit the record.
    #[error("failed to scan row of `{sql}`: {source}")]
    Scan {
        sql: String,
        #[source]
        source: ScanError,
    },
    /// The statement succeeded but a stamped timestamp did not fit its field.
    #[error("statement succeeded but timestamp write-back failed: {0}")]
    WriteBack(#[source] ValueError),
}
