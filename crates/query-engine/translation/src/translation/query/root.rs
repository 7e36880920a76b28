//! Build the page and count statements of a `query` request.

use doytoql_models::QueryRequest;
use query_engine_metadata::metadata::Metadata;
use query_engine_sql::sql;

use super::super::error::Error;
use super::{domain_of, filtering, helpers, sorting};

/// `SELECT <columns|*> FROM <table> [<where>] [<order by>] [<limit>]`
pub fn translate_select(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::ast::Select, Error> {
    let domain = domain_of(request)?;
    let mut select = sql::helpers::star_select(sql::ast::TableName(
        metadata.naming.table_name(domain),
    ));

    // projected columns are not case-folded
    if let Some(columns) = request.columns.as_ref().filter(|columns| !columns.is_empty()) {
        for column in columns {
            helpers::check_identifier(column, column)?;
        }
        select.select_list = sql::ast::SelectList::SelectList(
            columns.iter().cloned().map(sql::ast::ColumnName).collect(),
        );
    }

    select.where_ = filtering::translate_where(
        &metadata.naming,
        request.filters.as_ref(),
        request.domain_route.as_ref(),
    )?;

    if let Some(page) = &request.page {
        select.order_by = sorting::translate_order_by(&metadata.naming, page.sort.as_deref())?;
        select.limit = sorting::translate_limit(metadata.paging, page)?;
    }

    Ok(select)
}

/// `SELECT COUNT(*) FROM <table> [<where>]`, with the same filter as the
/// page statement and no paging.
pub fn translate_count(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::ast::Select, Error> {
    let domain = domain_of(request)?;
    let where_ = filtering::translate_where(
        &metadata.naming,
        request.filters.as_ref(),
        request.domain_route.as_ref(),
    )?;
    Ok(sql::helpers::count_select(
        sql::ast::TableName(metadata.naming.table_name(domain)),
        where_,
    ))
}

pub fn build_query_sql(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::string::SqlAndArgs, Error> {
    let select = translate_select(metadata, request)?;
    Ok(sql::string::SqlAndArgs::build(|sql| select.to_sql(sql)))
}

pub fn build_count_sql(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::string::SqlAndArgs, Error> {
    let count = translate_count(metadata, request)?;
    Ok(sql::string::SqlAndArgs::build(|sql| count.to_sql(sql)))
}

/// Both statements of a `query` request.
pub fn translate_query(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::execution_plan::Statement, Error> {
    Ok(sql::execution_plan::Statement::Query {
        rows: build_query_sql(metadata, request)?,
        count: build_count_sql(metadata, request)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use doytoql_models::PageQuery;
    use similar_asserts::assert_eq;

    #[test]
    fn select_columns() {
        let mut request = QueryRequest::new("query", "user");
        request.columns = Some(vec![
            "username".to_string(),
            "email".to_string(),
            "mobile".to_string(),
        ]);
        let sql = build_query_sql(&Metadata::empty(), &request).unwrap();
        assert_eq!(sql.sql, "SELECT username, email, mobile FROM t_user");
    }

    #[test]
    fn empty_columns_select_everything() {
        let mut request = QueryRequest::new("query", "user");
        request.columns = Some(vec![]);
        let sql = build_query_sql(&Metadata::empty(), &request).unwrap();
        assert_eq!(sql.sql, "SELECT * FROM t_user");
    }

    #[test]
    fn projected_columns_must_be_identifiers() {
        let mut request = QueryRequest::new("query", "user");
        request.columns = Some(vec![
            "username".to_string(),
            "password FROM t_secret --".to_string(),
        ]);
        assert_eq!(
            build_query_sql(&Metadata::empty(), &request),
            Err(Error::InvalidIdentifier("password FROM t_secret --".to_string()))
        );
    }

    #[test]
    fn paging_only_applies_to_the_page() {
        let mut request = QueryRequest::new("query", "user");
        request.filters = Some(serde_json::from_str(r#"{"validEq": true}"#).unwrap());
        request.page = Some(PageQuery {
            page_number: Some(2),
            page_size: Some(2),
            sort: Some("id,desc".to_string()),
        });

        let metadata = Metadata::empty();
        let rows = build_query_sql(&metadata, &request).unwrap();
        let count = build_count_sql(&metadata, &request).unwrap();
        assert_eq!(
            rows.sql,
            "SELECT * FROM t_user WHERE valid = ? ORDER BY id DESC LIMIT 2 OFFSET 2"
        );
        assert_eq!(count.sql, "SELECT COUNT(*) FROM t_user WHERE valid = ?");
        assert_eq!(rows.args, count.args);
    }

    #[test]
    fn missing_domain() {
        let request = QueryRequest {
            operation: Some("query".to_string()),
            domain: Some(String::new()),
            ..QueryRequest::default()
        };
        assert_eq!(
            build_query_sql(&Metadata::empty(), &request),
            Err(Error::MissingDomain)
        );
    }
}
