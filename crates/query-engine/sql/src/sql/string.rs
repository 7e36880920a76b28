//! Type definitions of a low-level SQL string representation.

use serde::Serialize;

use super::ast::Value;

/// The positional parameter marker.
pub const PLACEHOLDER: &str = "?";

/// SQL text with `?` placeholders and the values bound to them, in
/// placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SqlAndArgs {
    pub sql: String,
    pub args: Vec<Value>,
}

impl SqlAndArgs {
    pub fn new() -> SqlAndArgs {
        SqlAndArgs {
            sql: String::new(),
            args: vec![],
        }
    }

    /// Render into a fresh buffer, e.g. `SqlAndArgs::build(|sql| select.to_sql(sql))`.
    pub fn build(render: impl FnOnce(&mut SqlAndArgs)) -> SqlAndArgs {
        let mut sql = SqlAndArgs::new();
        render(&mut sql);
        sql
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Emitted verbatim. Names taken from the request are checked to be
    /// identifiers during translation.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push_str(identifier);
    }

    pub fn append_param(&mut self, value: Value) {
        self.sql.push_str(PLACEHOLDER);
        self.args.push(value);
    }

    /// Number of placeholders in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches(PLACEHOLDER).count()
    }
}
