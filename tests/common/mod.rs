//! Common test utilities for integration tests.

use std::{collections::VecDeque, fmt, sync::Mutex};

use rowmap::{Connection, Row, Value};

/// Error handed out by [`MockConnection`] when a failure is scripted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockError(pub &'static str);

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for MockError {}

#[derive(Debug)]
pub enum Reply {
    Affected(u64),
    Row(Row),
    Fail(&'static str),
}

/// Records every statement it receives and answers with scripted replies in order.
#[derive(Debug, Default)]
pub struct MockConnection {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl MockConnection {
    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        MockConnection {
            calls: Mutex::default(),
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, sql: &str, args: &[Value]) -> Reply {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_owned(), args.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected statement")
    }
}

impl Connection for MockConnection {
    type Error = MockError;

    async fn execute(&self, sql: &str, args: &[Value]) -> Result<u64, MockError> {
        match self.next(sql, args) {
            Reply::Affected(affected) => Ok(affected),
            Reply::Fail(message) => Err(MockError(message)),
            Reply::Row(_) => panic!("scripted a row for `{sql}`"),
        }
    }

    async fn query_row(&self, sql: &str, args: &[Value]) -> Result<Row, MockError> {
        match self.next(sql, args) {
            Reply::Row(row) => Ok(row),
            Reply::Fail(message) => Err(MockError(message)),
            Reply::Affected(_) => panic!("scripted an affected count for `{sql}`"),
        }
    }
}
