pub mod models;
pub mod repo;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::Error;
use models::{Row, Statement};

/// Runs a statement and returns every resulting row.
#[async_trait]
pub trait Database: Send + Sync {
    async fn fetch_rows(&self, statement: &Statement) -> Result<Vec<Row>, Error>;
}
