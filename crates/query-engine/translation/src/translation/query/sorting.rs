//! Translate paging and sort requests.

use doytoql_models::PageQuery;
use query_engine_metadata::metadata::{NamingConvention, PagingSettings};
use query_engine_sql::sql;

use super::super::error::Error;
use super::helpers;

/// Separates sort entries.
const ENTRY_SEPARATOR: char = ';';
/// Separates a sort column from its direction.
const DIRECTION_SEPARATOR: char = ',';

/// Convert a sort string such as `createTime,desc;id` into an ORDER BY clause.
pub fn translate_order_by(
    naming: &NamingConvention,
    sort: Option<&str>,
) -> Result<sql::ast::OrderBy, Error> {
    let Some(sort) = sort.map(str::trim).filter(|sort| !sort.is_empty()) else {
        return Ok(sql::helpers::empty_order_by());
    };
    let elements = sort
        .split(ENTRY_SEPARATOR)
        .map(|entry| translate_order_by_element(naming, sort, entry))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(sql::ast::OrderBy { elements })
}

fn translate_order_by_element(
    naming: &NamingConvention,
    sort: &str,
    entry: &str,
) -> Result<sql::ast::OrderByElement, Error> {
    let invalid = || Error::InvalidSort(sort.to_string());

    let (column, direction) = match entry.split_once(DIRECTION_SEPARATOR) {
        None => (entry.trim(), sql::ast::OrderByDirection::Asc),
        Some((column, direction)) => {
            let direction = match direction.trim().to_ascii_lowercase().as_str() {
                "asc" => sql::ast::OrderByDirection::Asc,
                "desc" => sql::ast::OrderByDirection::Desc,
                _ => return Err(invalid()),
            };
            (column.trim(), direction)
        }
    };
    if !helpers::is_identifier(column) {
        return Err(invalid());
    }
    Ok(sql::ast::OrderByElement {
        target: sql::ast::ColumnName(naming.column_name(column)),
        direction,
    })
}

/// Compute LIMIT and OFFSET for a page request.
pub fn translate_limit(paging: PagingSettings, page: &PageQuery) -> Result<sql::ast::Limit, Error> {
    let page_size = page.page_size.unwrap_or(paging.default_page_size);
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    Ok(sql::ast::Limit {
        limit: Some(page_size),
        offset: Some(paging.offset(page.page_number, page_size)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn render_order_by(sort: &str) -> Result<String, Error> {
        let order_by = translate_order_by(&NamingConvention::default(), Some(sort))?;
        Ok(sql::string::SqlAndArgs::build(|sql| order_by.to_sql(sql)).sql)
    }

    #[test]
    fn sort_entries() {
        assert_eq!(
            render_order_by("createTime,desc;id").unwrap(),
            " ORDER BY create_time DESC, id ASC"
        );
        assert_eq!(render_order_by("id,ASC").unwrap(), " ORDER BY id ASC");
        assert_eq!(render_order_by("  ").unwrap(), "");
    }

    #[test]
    fn invalid_sorts() {
        for sort in ["id,up", "id;", "1id", "id desc", "id);drop table t_user"] {
            assert_eq!(
                render_order_by(sort),
                Err(Error::InvalidSort(sort.to_string())),
                "{sort}"
            );
        }
    }

    #[test]
    fn limits() {
        let paging = PagingSettings::default();
        let page = PageQuery {
            page_number: Some(2),
            page_size: Some(2),
            sort: None,
        };
        assert_eq!(
            translate_limit(paging, &page),
            Ok(sql::ast::Limit {
                limit: Some(2),
                offset: Some(2),
            })
        );
        assert_eq!(
            translate_limit(paging, &PageQuery::default()),
            Ok(sql::ast::Limit {
                limit: Some(10),
                offset: Some(0),
            })
        );
    }

    #[test]
    fn zero_page_size_fails() {
        let page = PageQuery {
            page_size: Some(0),
            ..PageQuery::default()
        };
        assert_eq!(
            translate_limit(PagingSettings::default(), &page),
            Err(Error::InvalidPageSize)
        );
    }
}
