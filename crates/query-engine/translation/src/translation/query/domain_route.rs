//! Translate a domain route into nested `IN` subqueries over join tables.
//!
//! A route `[user, role, perm]` relates users to permissions through the
//! join tables `j_user_and_role` and `j_role_and_perm`. The route is
//! compiled starting from the leaf (the domain being filtered) and wrapping
//! one subquery per hop, so the final expression reads outermost-first:
//!
//! ```sql
//! id IN (SELECT user_id FROM j_user_and_role
//!        WHERE role_id IN (SELECT role_id FROM j_role_and_perm WHERE perm_id = ?))
//! ```

use doytoql_models::{DomainRoute, Mapping, Value};
use query_engine_metadata::metadata::NamingConvention;
use query_engine_sql::sql;

use super::super::error::Error;
use super::{filtering, helpers};

/// Suffix of route filter keys holding a standalone query on an
/// intermediate domain, e.g. `roleQuery`.
pub const QUERY_SUFFIX: &str = "Query";

/// Translate a route into `<id> IN (...)`.
pub fn translate_domain_route(
    naming: &NamingConvention,
    route: &DomainRoute,
) -> Result<sql::ast::Expression, Error> {
    if route.path.len() < 2 {
        return Err(Error::RouteTooShort);
    }
    for domain in &route.path {
        helpers::check_identifier(domain, domain)?;
    }
    if let Some(id_column) = &route.last_domain_id_column {
        helpers::check_identifier(id_column, id_column)?;
    }

    let mut walk: Vec<&str> = route.path.iter().map(String::as_str).collect();
    let mut hops: Vec<sql::ast::TableName> = route
        .path
        .windows(2)
        .map(|pair| sql::ast::TableName(naming.join_table_name(&pair[0], &pair[1])))
        .collect();
    if !route.reverse {
        walk.reverse();
        hops.reverse();
    }

    // Domains strictly between the leaf and the root may carry a `...Query`.
    let intermediate = &walk[1..walk.len() - 1];
    let leaf = walk[0];

    let mut used_keys: Vec<&str> = vec![];
    let leaf_where = translate_leaf(naming, route, leaf, intermediate, &mut used_keys)?;

    let mut select = sql::helpers::sub_select(join_id(naming, walk[1]), hops[0].clone(), leaf_where);

    for current in 2..walk.len() {
        let inner = walk[current - 1];
        let mut selects = vec![];
        if let Some(query) = translate_domain_query(naming, route, inner, &mut used_keys)? {
            selects.push(query);
        }
        selects.push(select);
        select = sql::helpers::sub_select(
            join_id(naming, walk[current]),
            hops[current - 1].clone(),
            sql::ast::Where(vec![sql::helpers::in_subquery(join_id(naming, inner), selects)]),
        );
    }

    for key in route.filters.keys() {
        if !used_keys.contains(&key.as_str()) {
            tracing::warn!(key = key.as_str(), "domain route filter matches no domain and is ignored");
        }
    }

    Ok(sql::helpers::in_subquery(
        sql::ast::ColumnName(naming.id_column.clone()),
        vec![select],
    ))
}

fn join_id(naming: &NamingConvention, domain: &str) -> sql::ast::ColumnName {
    sql::ast::ColumnName(naming.join_id_column(domain))
}

/// The condition of the innermost subquery, from the first route filter
/// whose key starts with the leaf domain name. Later leaf filters are
/// ignored, except that a direct predicate and a `<leaf>Query` mapping
/// cannot be combined.
fn translate_leaf<'a>(
    naming: &NamingConvention,
    route: &'a DomainRoute,
    leaf: &str,
    intermediate: &[&str],
    used_keys: &mut Vec<&'a str>,
) -> Result<sql::ast::Where, Error> {
    let candidates: Vec<(&'a String, &'a Value)> = route
        .filters
        .iter()
        .filter(|(key, _)| {
            key.starts_with(leaf)
                && !intermediate.iter().any(|domain| is_query_key(key, domain))
        })
        .collect();

    let Some(&(key, value)) = candidates.first() else {
        return Ok(sql::helpers::empty_where());
    };
    let first_is_query = is_query_key(key, leaf);
    if let Some((second, _)) = candidates
        .iter()
        .find(|(other, _)| is_query_key(other, leaf) != first_is_query)
    {
        return Err(Error::AmbiguousRouteFilter {
            domain: leaf.to_string(),
            first: key.clone(),
            second: (*second).clone(),
        });
    }
    used_keys.push(key);
    for &(ignored, _) in &candidates[1..] {
        tracing::warn!(
            key = ignored.as_str(),
            applied = key.as_str(),
            "only the first route filter on the leaf domain is applied"
        );
        used_keys.push(ignored);
    }

    let expression = match value {
        Value::Mapping(query) => {
            let id_column = route
                .last_domain_id_column
                .clone()
                .unwrap_or_else(|| naming.id_column.clone());
            sql::helpers::in_subquery(
                join_id(naming, leaf),
                vec![sql::helpers::sub_select(
                    sql::ast::ColumnName(id_column),
                    sql::ast::TableName(naming.table_name(leaf)),
                    translate_mapping(naming, query)?,
                )],
            )
        }
        Value::Scalar(_) | Value::Array(_) => filtering::translate_filter(naming, key, value)?,
    };
    Ok(sql::ast::Where(vec![expression]))
}

/// `SELECT id FROM <table(domain)> <where>` for a `<domain>Query` route
/// filter, intersected with the join-chain membership of that hop.
fn translate_domain_query<'a>(
    naming: &NamingConvention,
    route: &'a DomainRoute,
    domain: &str,
    used_keys: &mut Vec<&'a str>,
) -> Result<Option<sql::ast::SubSelect>, Error> {
    let Some((key, value)) = route
        .filters
        .iter()
        .find(|(key, _)| is_query_key(key, domain))
    else {
        return Ok(None);
    };
    used_keys.push(key);

    let Value::Mapping(query) = value else {
        return Err(Error::UnexpectedValue {
            key: key.clone(),
            expected: "an object",
        });
    };
    Ok(Some(sql::helpers::sub_select(
        sql::ast::ColumnName(naming.id_column.clone()),
        sql::ast::TableName(naming.table_name(domain)),
        translate_mapping(naming, query)?,
    )))
}

fn translate_mapping(naming: &NamingConvention, query: &Mapping) -> Result<sql::ast::Where, Error> {
    Ok(sql::ast::Where(filtering::translate_filters(naming, query)?))
}

fn is_query_key(key: &str, domain: &str) -> bool {
    key.strip_prefix(domain) == Some(QUERY_SUFFIX)
}
