//! Describe the statements to run against the database.

use super::string::SqlAndArgs;

/// Everything needed to execute one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// The domain the request targets, for logging.
    pub domain: String,
    pub statement: Statement,
}

/// The statements of a plan, by operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A page of rows and the total count for the same filter.
    Query {
        rows: SqlAndArgs,
        count: SqlAndArgs,
    },
    Insert(SqlAndArgs),
    Update(SqlAndArgs),
    Delete(SqlAndArgs),
}

impl Statement {
    /// The statements in the order they are printed or logged.
    pub fn statements(&self) -> Vec<&SqlAndArgs> {
        match self {
            Statement::Query { rows, count } => vec![rows, count],
            Statement::Insert(sql) | Statement::Update(sql) | Statement::Delete(sql) => vec![sql],
        }
    }

    pub fn operation_name(&self) -> &'static str {
        match self {
            Statement::Query { .. } => "query",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
        }
    }
}
