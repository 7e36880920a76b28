//! Handle filtering/where clauses translation.

use doytoql_models::{DomainRoute, Mapping, Value};
use query_engine_metadata::metadata::NamingConvention;
use query_engine_sql::sql;

use super::super::error::Error;
use super::{domain_route, helpers};
use super::operators::Operator;

/// Keys ending with this suffix hold a mapping of alternative conditions.
pub const OR_SUFFIX: &str = "Or";

/// Translate the WHERE clause of a request: the compiled domain route, if
/// any, followed by one condition per filter entry.
pub fn translate_where(
    naming: &NamingConvention,
    filters: Option<&Mapping>,
    route: Option<&DomainRoute>,
) -> Result<sql::ast::Where, Error> {
    let mut expressions = vec![];
    if let Some(route) = route {
        expressions.push(domain_route::translate_domain_route(naming, route)?);
    }
    if let Some(filters) = filters {
        expressions.extend(translate_filters(naming, filters)?);
    }
    Ok(sql::ast::Where(expressions))
}

/// Translate a flat filter mapping into conditions, in key order.
pub fn translate_filters(
    naming: &NamingConvention,
    filters: &Mapping,
) -> Result<Vec<sql::ast::Expression>, Error> {
    filters
        .iter()
        .map(|(key, value)| translate_filter(naming, key, value))
        .collect()
}

/// Translate one filter entry, which is either an OR group or a condition.
pub fn translate_filter(
    naming: &NamingConvention,
    key: &str,
    value: &Value,
) -> Result<sql::ast::Expression, Error> {
    if key.ends_with(OR_SUFFIX) {
        translate_or_group(naming, key, value)
    } else {
        translate_condition(naming, key, value)
    }
}

/// Translate a key through the suffix grammar into a single condition.
pub fn translate_condition(
    naming: &NamingConvention,
    key: &str,
    value: &Value,
) -> Result<sql::ast::Expression, Error> {
    let (field, operator) = Operator::resolve(key);
    helpers::check_identifier(key, field)?;
    let column = sql::ast::ColumnName(naming.column_name(field));
    operator.translate(column, key, value)
}

/// `(c1 = ? OR c2 = ? ...)`. Entries of the group go through the suffix
/// grammar only; groups do not nest.
fn translate_or_group(
    naming: &NamingConvention,
    key: &str,
    value: &Value,
) -> Result<sql::ast::Expression, Error> {
    let Value::Mapping(conditions) = value else {
        return Err(Error::InvalidFilterShape {
            key: key.to_string(),
        });
    };
    if conditions.is_empty() {
        return Err(Error::EmptyOrGroup {
            key: key.to_string(),
        });
    }
    let alternatives = conditions
        .iter()
        .map(|(key, value)| translate_condition(naming, key, value))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(sql::ast::Expression::Or(alternatives))
}

/// Render a filter mapping as ` WHERE ...`, or as an empty string when the
/// mapping is empty.
pub fn build_where(
    naming: &NamingConvention,
    filters: &Mapping,
) -> Result<sql::string::SqlAndArgs, Error> {
    let where_ = sql::ast::Where(translate_filters(naming, filters)?);
    Ok(sql::string::SqlAndArgs::build(|sql| where_.to_sql(sql)))
}
