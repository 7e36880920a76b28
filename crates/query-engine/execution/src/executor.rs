//! The seam between compiled statements and a database driver.

use async_trait::async_trait;
use query_engine_sql::sql::string::SqlAndArgs;

use crate::error::DatabaseError;

/// A row returned by the database, with columns in select order.
pub type ResultRow = serde_json::Map<String, serde_json::Value>;

/// Runs parameterized SQL. Implementations own connections and transactions;
/// arguments are bound to the `?` placeholders in order.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run a SELECT and return its rows.
    async fn query(&self, statement: &SqlAndArgs) -> Result<Vec<ResultRow>, DatabaseError>;

    /// Run a `SELECT COUNT(*)` and return the count.
    async fn count(&self, statement: &SqlAndArgs) -> Result<u64, DatabaseError>;

    /// Run an INSERT, UPDATE or DELETE and return the number of affected rows.
    async fn update(&self, statement: &SqlAndArgs) -> Result<u64, DatabaseError>;
}
