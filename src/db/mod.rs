mod error;

use std::future::Future;

pub use error::DbError;

use crate::{
    observability::{log_debug, log_warn},
    option::MapperOption,
    query::{QueryBuilder, Statement},
    record::{Record, Row, Value},
};

/// The collaborator that actually runs SQL, usually a thin adapter over a driver.
pub trait Connection {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs an INSERT, UPDATE or DELETE and returns the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Runs a SELECT that yields exactly one row.
    fn query_row(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl Future<Output = Result<Row, Self::Error>> + Send;
}

/// Inserts, updates, deletes and selects records through a [`Connection`].
///
/// Statements are built before any I/O, so a record without a resolvable
/// primary key never reaches the connection.
#[derive(Debug)]
pub struct Database<C> {
    conn: C,
    builder: QueryBuilder,
}

impl<C> Database<C>
where
    C: Connection,
{
    pub fn new(conn: C) -> Self {
        Self::with_option(conn, MapperOption::default())
    }

    pub fn with_option(conn: C, option: MapperOption) -> Self {
        Database {
            conn,
            builder: QueryBuilder::new(option),
        }
    }

    pub fn builder(&self) -> &QueryBuilder {
        &self.builder
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    pub fn into_inner(self) -> C {
        self.conn
    }

    /// Inserts the record. Stamped `created_at` fields are written back into
    /// the record once the statement succeeds.
    pub async fn insert<R: Record>(&self, record: &mut R) -> Result<u64, DbError> {
        let statement = self.builder.build_insert(record)?;
        let affected = self.execute(&statement).await?;
        self.write_back(record, &statement)?;
        Ok(affected)
    }

    /// Updates the row addressed by the record's primary key. Stamped
    /// `updated_at` fields are written back into the record once the
    /// statement succeeds.
    pub async fn update<R: Record>(&self, record: &mut R) -> Result<u64, DbError> {
        let statement = self.builder.build_update(record)?;
        let affected = self.execute(&statement).await?;
        self.write_back(record, &statement)?;
        Ok(affected)
    }

    /// Deletes the row addressed by the record's primary key.
    pub async fn delete<R: Record>(&self, record: &R) -> Result<u64, DbError> {
        let statement = self.builder.build_delete(record)?;
        self.execute(&statement).await
    }

    /// Loads the row addressed by the record's primary key into the record.
    pub async fn select<R: Record>(&self, record: &mut R) -> Result<(), DbError> {
        let statement = self.builder.build_select(record)?;
        let row = self
            .conn
            .query_row(statement.sql(), statement.args())
            .await
            .map_err(|err| execution_failure(&statement, err))?;

        record.scan(row).map_err(|source| {
            log_warn!(
                component = "db",
                event = "scan_failed",
                sql = statement.sql(),
                error = %source,
            );
            DbError::Scan {
                sql: statement.sql().to_owned(),
                source,
            }
        })
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, DbError> {
        let affected = self
            .conn
            .execute(statement.sql(), statement.args())
            .await
            .map_err(|err| execution_failure(statement, err))?;
        log_debug!(
            component = "db",
            event = "statement_executed",
            sql = statement.sql(),
            affected,
        );
        Ok(affected)
    }

    fn write_back<R: Record>(&self, record: &mut R, statement: &Statement) -> Result<(), DbError> {
        if !self.builder.option().write_back_timestamps {
            return Ok(());
        }
        for (index, value) in statement.stamps() {
            record
                .assign(*index, value.clone())
                .map_err(DbError::WriteBack)?;
        }
        Ok(())
    }
}

fn execution_failure<E>(statement: &Statement, err: E) -> DbError
where
    E: std::error::Error + Send + Sync + 'static,
{
    log_warn!(
        component = "db",
        event = "execution_failed",
        sql = statement.sql(),
        error = %err,
    );
    DbError::Execution {
        sql: statement.sql().to_owned(),
        source: Box::new(err),
    }
}
