//! The suffix grammar of filter keys.
//!
//! A filter key is a field name followed by an optional operator suffix,
//! e.g. `idGt` or `usernameContain`. Keys without a recognized suffix are
//! equality tests.

use doytoql_models::Value;
use enum_iterator::Sequence;
use query_engine_sql::sql;

use super::super::error::Error;
use super::values::{self, Wildcards};

/// A filter operator, selected by the suffix of a filter key.
///
/// Variants are matched in declaration order, so a suffix must come before
/// any shorter suffix it ends with (`NotIn` before `In`, `NotNull` before
/// `Null`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence)]
pub enum Operator {
    Eq,
    Ne,
    Not,
    Gt,
    Ge,
    Lt,
    Le,
    NotIn,
    In,
    NotLike,
    Contain,
    Start,
    End,
    NotNull,
    Null,
}

/// How many arguments an operator binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Nothing is bound; the filter value is ignored.
    Zero,
    /// One scalar.
    One,
    /// One argument per element of a non-empty array.
    Many,
}

impl Operator {
    pub fn suffix(self) -> &'static str {
        match self {
            Operator::Eq => "Eq",
            Operator::Ne => "Ne",
            Operator::Not => "Not",
            Operator::Gt => "Gt",
            Operator::Ge => "Ge",
            Operator::Lt => "Lt",
            Operator::Le => "Le",
            Operator::NotIn => "NotIn",
            Operator::In => "In",
            Operator::NotLike => "NotLike",
            Operator::Contain => "Contain",
            Operator::Start => "Start",
            Operator::End => "End",
            Operator::NotNull => "NotNull",
            Operator::Null => "Null",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operator::In | Operator::NotIn => Arity::Many,
            Operator::Null | Operator::NotNull => Arity::Zero,
            _ => Arity::One,
        }
    }

    /// Split a filter key into its field name and operator.
    ///
    /// A suffix only counts when something is left in front of it, so a
    /// key like `In` is a field named `In`.
    pub fn resolve(key: &str) -> (&str, Operator) {
        enum_iterator::all::<Operator>()
            .find_map(|operator| {
                key.strip_suffix(operator.suffix())
                    .filter(|field| !field.is_empty())
                    .map(|field| (field, operator))
            })
            .unwrap_or((key, Operator::Eq))
    }

    /// Render the condition for `column`, reading arguments from `value`.
    /// `key` is only used for error reporting.
    pub fn translate(
        self,
        column: sql::ast::ColumnName,
        key: &str,
        value: &Value,
    ) -> Result<sql::ast::Expression, Error> {
        let binary = |operator: sql::ast::BinaryOperator, right: sql::ast::Value| {
            sql::ast::Expression::BinaryOperation {
                left: column.clone(),
                operator,
                right,
            }
        };
        let expression = match self {
            Operator::Eq => binary(
                sql::ast::BinaryOperator::Equals,
                values::translate_value(key, value)?,
            ),
            Operator::Ne | Operator::Not => binary(
                sql::ast::BinaryOperator::NotEquals,
                values::translate_value(key, value)?,
            ),
            Operator::Gt => binary(
                sql::ast::BinaryOperator::GreaterThan,
                values::translate_value(key, value)?,
            ),
            Operator::Ge => binary(
                sql::ast::BinaryOperator::GreaterThanOrEqualTo,
                values::translate_value(key, value)?,
            ),
            Operator::Lt => binary(
                sql::ast::BinaryOperator::LessThan,
                values::translate_value(key, value)?,
            ),
            Operator::Le => binary(
                sql::ast::BinaryOperator::LessThanOrEqualTo,
                values::translate_value(key, value)?,
            ),
            Operator::Contain => binary(
                sql::ast::BinaryOperator::Like,
                values::translate_pattern(key, value, Wildcards::Both)?,
            ),
            Operator::Start => binary(
                sql::ast::BinaryOperator::Like,
                values::translate_pattern(key, value, Wildcards::Trailing)?,
            ),
            Operator::End => binary(
                sql::ast::BinaryOperator::Like,
                values::translate_pattern(key, value, Wildcards::Leading)?,
            ),
            Operator::NotLike => binary(
                sql::ast::BinaryOperator::NotLike,
                values::translate_pattern(key, value, Wildcards::Both)?,
            ),
            Operator::In => sql::ast::Expression::BinaryArrayOperation {
                left: column.clone(),
                operator: sql::ast::BinaryArrayOperator::In,
                right: values::translate_array(key, value)?,
            },
            Operator::NotIn => sql::ast::Expression::BinaryArrayOperation {
                left: column.clone(),
                operator: sql::ast::BinaryArrayOperator::NotIn,
                right: values::translate_array(key, value)?,
            },
            // null tests never read their value
            Operator::Null => sql::ast::Expression::UnaryOperation {
                column: column.clone(),
                operator: sql::ast::UnaryOperator::IsNull,
            },
            Operator::NotNull => sql::ast::Expression::UnaryOperation {
                column: column.clone(),
                operator: sql::ast::UnaryOperator::IsNotNull,
            },
        };
        Ok(expression)
    }
}
