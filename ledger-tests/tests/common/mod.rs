//! In-memory pool that records every statement and replays scripted results

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use ledger_sql::{Error, ExecuteResult, Pool, Record, Result, Value};

/// A statement as the pool received it
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub sql: String,
    pub params: Vec<Value>,
}

enum Reply {
    Rows(Vec<Record>),
    Affected(u64),
    Fail(String),
}

/// Replies are consumed in order; with none left, queries return no rows
/// and statements affect no rows.
#[derive(Default)]
pub struct RecordingPool {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl RecordingPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_rows(self, rows: Vec<Record>) -> Self {
        self.push(Reply::Rows(rows))
    }

    pub fn reply_affected(self, rows_affected: u64) -> Self {
        self.push(Reply::Affected(rows_affected))
    }

    pub fn reply_error(self, message: &str) -> Self {
        self.push(Reply::Fail(message.to_string()))
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no statement was run")
    }

    fn record(&self, sql: &str, params: Vec<Value>) -> Option<Reply> {
        self.calls.lock().unwrap().push(Call {
            sql: sql.to_string(),
            params,
        });
        self.replies.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl Pool for RecordingPool {
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult> {
        match self.record(sql, params) {
            Some(Reply::Affected(rows_affected)) => Ok(ExecuteResult { rows_affected }),
            Some(Reply::Fail(message)) => Err(Error::Pool(message)),
            Some(Reply::Rows(_)) => Err(Error::Pool("expected a statement reply".into())),
            None => Ok(ExecuteResult::default()),
        }
    }

    async fn fetch_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Record>> {
        match self.record(sql, params) {
            Some(Reply::Rows(rows)) => Ok(rows),
            Some(Reply::Fail(message)) => Err(Error::Pool(message)),
            Some(Reply::Affected(_)) => Err(Error::Pool("expected a query reply".into())),
            None => Ok(Vec::new()),
        }
    }
}
