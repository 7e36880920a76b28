//! Handle the translation of literal values.

use doytoql_models::{Scalar, Value};
use query_engine_sql::sql;

use super::super::error::Error;

/// Convert a request scalar into a SQL value.
pub fn translate_scalar(scalar: &Scalar) -> sql::ast::Value {
    match scalar {
        Scalar::Null => sql::ast::Value::Null,
        Scalar::Bool(b) => sql::ast::Value::Bool(*b),
        Scalar::Number(num) => sql::ast::Value::Number(num.clone()),
        Scalar::String(s) => sql::ast::Value::String(s.clone()),
    }
}

/// Convert a value which must be a scalar.
pub fn translate_value(key: &str, value: &Value) -> Result<sql::ast::Value, Error> {
    match value {
        Value::Scalar(scalar) => Ok(translate_scalar(scalar)),
        Value::Array(_) | Value::Mapping(_) => Err(Error::UnexpectedValue {
            key: key.to_string(),
            expected: "a scalar",
        }),
    }
}

/// Convert a value which must be a non-empty array of scalars.
pub fn translate_array(key: &str, value: &Value) -> Result<Vec<sql::ast::Value>, Error> {
    match value {
        Value::Array(items) if items.is_empty() => Err(Error::EmptyInList {
            key: key.to_string(),
        }),
        Value::Array(items) => items
            .iter()
            .map(|item| translate_value(key, item))
            .collect::<Result<Vec<sql::ast::Value>, Error>>(),
        Value::Scalar(_) | Value::Mapping(_) => Err(Error::UnexpectedValue {
            key: key.to_string(),
            expected: "an array",
        }),
    }
}

/// Where a LIKE pattern puts its wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcards {
    /// `%v%`
    Both,
    /// `v%`
    Trailing,
    /// `%v`
    Leading,
}

/// Build a LIKE pattern from a scalar. Numbers and booleans are matched by
/// their textual form.
pub fn translate_pattern(
    key: &str,
    value: &Value,
    wildcards: Wildcards,
) -> Result<sql::ast::Value, Error> {
    let text = match value {
        Value::Scalar(Scalar::String(s)) => s.clone(),
        Value::Scalar(Scalar::Number(num)) => num.to_string(),
        Value::Scalar(Scalar::Bool(b)) => b.to_string(),
        Value::Scalar(Scalar::Null) | Value::Array(_) | Value::Mapping(_) => {
            return Err(Error::UnexpectedValue {
                key: key.to_string(),
                expected: "a string",
            })
        }
    };
    let pattern = match wildcards {
        Wildcards::Both => format!("%{text}%"),
        Wildcards::Trailing => format!("{text}%"),
        Wildcards::Leading => format!("%{text}"),
    };
    Ok(sql::ast::Value::String(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn patterns() {
        let value = Value::from("test");
        assert_eq!(
            translate_pattern("nameContain", &value, Wildcards::Both),
            Ok(sql::ast::Value::String("%test%".to_string()))
        );
        assert_eq!(
            translate_pattern("nameStart", &value, Wildcards::Trailing),
            Ok(sql::ast::Value::String("test%".to_string()))
        );
        assert_eq!(
            translate_pattern("nameEnd", &value, Wildcards::Leading),
            Ok(sql::ast::Value::String("%test".to_string()))
        );
        assert_eq!(
            translate_pattern("codeStart", &Value::from(42_i64), Wildcards::Trailing),
            Ok(sql::ast::Value::String("42%".to_string()))
        );
    }

    #[test]
    fn null_is_not_a_pattern() {
        assert_eq!(
            translate_pattern("nameContain", &Value::Scalar(Scalar::Null), Wildcards::Both),
            Err(Error::UnexpectedValue {
                key: "nameContain".to_string(),
                expected: "a string",
            })
        );
    }

    #[test]
    fn arrays_must_hold_scalars() {
        let nested = Value::Array(vec![Value::from(vec![1_i64])]);
        assert_eq!(
            translate_array("idIn", &nested),
            Err(Error::UnexpectedValue {
                key: "idIn".to_string(),
                expected: "a scalar",
            })
        );
        assert_eq!(
            translate_array("idIn", &Value::from(1_i64)),
            Err(Error::UnexpectedValue {
                key: "idIn".to_string(),
                expected: "an array",
            })
        );
    }
}
