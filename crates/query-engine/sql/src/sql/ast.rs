//! Type definitions of a SQL AST representation.

use serde::{Deserialize, Serialize};

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: TableName,
    pub where_: Where,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    SelectList(Vec<ColumnName>),
    SelectStar,
    CountStar,
}

/// An INSERT clause with one VALUES tuple per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableName,
    pub columns: Vec<ColumnName>,
    pub values: Vec<Vec<Value>>,
}

/// An UPDATE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableName,
    pub set: Vec<(ColumnName, Value)>,
    pub where_: Where,
}

/// A DELETE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: TableName,
    pub where_: Where,
}

/// A WHERE clause: its expressions are joined with AND.
/// An empty clause renders as nothing at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Where(pub Vec<Expression>);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: ColumnName,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// LIMIT and OFFSET clauses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Limit {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

/// A boolean expression on a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `column <op> ?`
    BinaryOperation {
        left: ColumnName,
        operator: BinaryOperator,
        right: Value,
    },
    /// `column [NOT] IN (?, ?, ...)`
    BinaryArrayOperation {
        left: ColumnName,
        operator: BinaryArrayOperator,
        right: Vec<Value>,
    },
    /// `column IS [NOT] NULL`
    UnaryOperation {
        column: ColumnName,
        operator: UnaryOperator,
    },
    /// A parenthesized OR group.
    Or(Vec<Expression>),
    /// `column IN (<subquery>)`
    InSubquery {
        column: ColumnName,
        subquery: Box<Subquery>,
    },
}

/// Sub-selects combined with INTERSECT. A single element is a plain sub-select.
#[derive(Debug, Clone, PartialEq)]
pub struct Subquery {
    pub selects: Vec<SubSelect>,
}

/// A one-column SELECT used inside a subquery.
#[derive(Debug, Clone, PartialEq)]
pub struct SubSelect {
    pub column: ColumnName,
    pub from: TableName,
    pub where_: Where,
}

/// A binary comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
    NotLike,
}

/// A binary operator when the rhs is an array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryArrayOperator {
    In,
    NotIn,
}

/// An unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    IsNull,
    IsNotNull,
}

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// A database table name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// A database table's column name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);
