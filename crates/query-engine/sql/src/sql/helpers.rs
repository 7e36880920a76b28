//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(vec![])
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// Empty `LIMIT` and `OFFSET` clauses.
pub fn empty_limit() -> Limit {
    Limit {
        limit: None,
        offset: None,
    }
}

// SELECTs //

/// Build a simple select * and the rest are empty.
pub fn star_select(from: TableName) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from,
        where_: empty_where(),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// Build a `SELECT COUNT(*)` over a table with a filter.
pub fn count_select(from: TableName, where_: Where) -> Select {
    Select {
        select_list: SelectList::CountStar,
        from,
        where_,
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// Build a one-column sub-select.
pub fn sub_select(column: ColumnName, from: TableName, where_: Where) -> SubSelect {
    SubSelect {
        column,
        from,
        where_,
    }
}

/// `column IN (<selects joined by INTERSECT>)`
pub fn in_subquery(column: ColumnName, selects: Vec<SubSelect>) -> Expression {
    Expression::InSubquery {
        column,
        subquery: Box::new(Subquery { selects }),
    }
}
