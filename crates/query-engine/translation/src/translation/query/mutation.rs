//! Build INSERT, UPDATE and DELETE statements.

use doytoql_models::{QueryRequest, Row};
use query_engine_metadata::metadata::{Metadata, NamingConvention};
use query_engine_sql::sql;

use super::super::error::Error;
use super::{domain_of, filtering, helpers, values};

/// The rows of an insert or update payload, which must be present and non-empty.
fn data_of(request: &QueryRequest) -> Result<&[Row], Error> {
    match request.data.as_deref() {
        None => Err(Error::DataRequired),
        Some([]) => Err(Error::DataEmpty),
        Some(rows) => Ok(rows),
    }
}

fn translate_row_values(row: &Row) -> Result<Vec<(&str, sql::ast::Value)>, Error> {
    row.iter()
        .map(|(key, value)| {
            helpers::check_identifier(key, key)?;
            values::translate_value(key, value).map(|value| (key.as_str(), value))
        })
        .collect()
}

fn column(naming: &NamingConvention, key: &str) -> sql::ast::ColumnName {
    sql::ast::ColumnName(naming.column_name(key))
}

/// `INSERT INTO <table> (c1, c2) VALUES (?, ?), (?, ?)`
///
/// Columns come from the first row. Every other row must carry exactly the
/// same fields; its values are bound in the first row's column order.
pub fn translate_insert(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::ast::Insert, Error> {
    let rows = data_of(request)?;
    let domain = domain_of(request)?;

    let first = &rows[0];
    if first.is_empty() {
        return Err(Error::EmptyRow { row: 0 });
    }
    let keys: Vec<&String> = first.keys().collect();
    for key in &keys {
        helpers::check_identifier(key, key)?;
    }

    let mut tuples = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(Error::EmptyRow { row: index });
        }
        if row.len() != keys.len() {
            return Err(Error::InconsistentRow { row: index });
        }
        let tuple = keys
            .iter()
            .map(|key| match row.get(key.as_str()) {
                Some(value) => values::translate_value(key, value),
                None => Err(Error::InconsistentRow { row: index }),
            })
            .collect::<Result<Vec<_>, Error>>()?;
        tuples.push(tuple);
    }

    Ok(sql::ast::Insert {
        table: sql::ast::TableName(metadata.naming.table_name(domain)),
        columns: keys
            .iter()
            .map(|key| column(&metadata.naming, key))
            .collect(),
        values: tuples,
    })
}

/// `UPDATE <table> SET c1 = ?, c2 = ? [<where>]`, with the fields of the
/// first row only.
pub fn translate_update(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::ast::Update, Error> {
    let rows = data_of(request)?;
    let first = &rows[0];
    if first.is_empty() {
        return Err(Error::NoUpdateFields);
    }
    if rows.len() > 1 {
        tracing::debug!(
            ignored = rows.len() - 1,
            "only the first row of an update is applied"
        );
    }
    let domain = domain_of(request)?;

    let set = translate_row_values(first)?
        .into_iter()
        .map(|(key, value)| (column(&metadata.naming, key), value))
        .collect();
    let where_ = filtering::translate_where(
        &metadata.naming,
        request.filters.as_ref(),
        request.domain_route.as_ref(),
    )?;

    Ok(sql::ast::Update {
        table: sql::ast::TableName(metadata.naming.table_name(domain)),
        set,
        where_,
    })
}

/// `DELETE FROM <table> [<where>]`. Without filters every row is deleted.
pub fn translate_delete(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::ast::Delete, Error> {
    let domain = domain_of(request)?;
    let where_ = filtering::translate_where(
        &metadata.naming,
        request.filters.as_ref(),
        request.domain_route.as_ref(),
    )?;
    Ok(sql::ast::Delete {
        from: sql::ast::TableName(metadata.naming.table_name(domain)),
        where_,
    })
}

pub fn build_insert_sql(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::string::SqlAndArgs, Error> {
    let insert = translate_insert(metadata, request)?;
    Ok(sql::string::SqlAndArgs::build(|sql| insert.to_sql(sql)))
}

pub fn build_update_sql(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::string::SqlAndArgs, Error> {
    let update = translate_update(metadata, request)?;
    Ok(sql::string::SqlAndArgs::build(|sql| update.to_sql(sql)))
}

pub fn build_delete_sql(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::string::SqlAndArgs, Error> {
    let delete = translate_delete(metadata, request)?;
    Ok(sql::string::SqlAndArgs::build(|sql| delete.to_sql(sql)))
}
