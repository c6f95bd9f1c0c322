use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sqlx::error::{DatabaseError, ErrorKind};

use crate::db::models::{Row, Statement};
use crate::db::Database;
use crate::error::Error;

#[derive(Clone)]
enum Outcome {
    Rows(Vec<Row>),
    Fail(String),
    Reject(String),
}

/// An error as reported by the database server itself.
#[derive(Debug)]
pub struct ServerError(String);

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for ServerError {}

impl DatabaseError for ServerError {
    fn message(&self) -> &str {
        &self.0
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Answers every statement with the same canned outcome and records what it was asked.
#[derive(Clone)]
pub struct MockDatabase {
    outcome: Outcome,
    statements: Arc<Mutex<Vec<Statement>>>,
}

impl MockDatabase {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            outcome: Outcome::Rows(rows),
            statements: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Outcome::Fail(message.to_string()),
            statements: Arc::default(),
        }
    }

    /// Fails the way a statement rejected by the server does.
    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: Outcome::Reject(message.to_string()),
            statements: Arc::default(),
        }
    }

    pub fn failure(message: &str) -> sqlx::Error {
        sqlx::Error::Protocol(message.to_string())
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl Database for MockDatabase {
    async fn fetch_rows(&self, statement: &Statement) -> Result<Vec<Row>, Error> {
        self.statements.lock().unwrap().push(statement.clone());
        match &self.outcome {
            Outcome::Rows(rows) => Ok(rows.clone()),
            Outcome::Fail(message) => Err(Self::failure(message).into()),
            Outcome::Reject(message) => {
                Err(sqlx::Error::Database(Box::new(ServerError(message.clone()))).into())
            }
        }
    }
}
