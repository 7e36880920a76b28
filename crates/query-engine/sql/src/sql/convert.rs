//! Convert a SQL AST to a low-level SQL string.
//!
//! Values are never inlined: every `Value` becomes a `?` placeholder and is
//! pushed onto the argument list at the moment it is rendered, so argument
//! order always matches placeholder order.

use super::ast::*;
use super::string::SqlAndArgs;

// Convert to SQL strings

impl Select {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        sql.append_syntax(" FROM ");
        self.from.to_sql(sql);

        self.where_.to_sql(sql);

        self.order_by.to_sql(sql);

        self.limit.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        match self {
            SelectList::SelectList(select_list) => {
                for (index, column) in select_list.iter().enumerate() {
                    column.to_sql(sql);
                    if index < (select_list.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
            SelectList::CountStar => {
                sql.append_syntax("COUNT(*)");
            }
        }
    }
}

impl Insert {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_syntax("INSERT INTO ");
        self.table.to_sql(sql);

        sql.append_syntax(" (");
        for (index, column) in self.columns.iter().enumerate() {
            column.to_sql(sql);
            if index < (self.columns.len() - 1) {
                sql.append_syntax(", ");
            }
        }
        sql.append_syntax(") VALUES ");

        for (row_index, row) in self.values.iter().enumerate() {
            sql.append_syntax("(");
            for (index, value) in row.iter().enumerate() {
                value.to_sql(sql);
                if index < (row.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
            sql.append_syntax(")");
            if row_index < (self.values.len() - 1) {
                sql.append_syntax(", ");
            }
        }
    }
}

impl Update {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_syntax("UPDATE ");
        self.table.to_sql(sql);
        sql.append_syntax(" SET ");
        for (index, (column, value)) in self.set.iter().enumerate() {
            column.to_sql(sql);
            sql.append_syntax(" = ");
            value.to_sql(sql);
            if index < (self.set.len() - 1) {
                sql.append_syntax(", ");
            }
        }
        self.where_.to_sql(sql);
    }
}

impl Delete {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_syntax("DELETE FROM ");
        self.from.to_sql(sql);
        self.where_.to_sql(sql);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        let Where(expressions) = self;
        if !expressions.is_empty() {
            sql.append_syntax(" WHERE ");
            self.conditions_to_sql(sql);
        }
    }

    /// The conditions only, joined with AND and without the WHERE keyword.
    pub fn conditions_to_sql(&self, sql: &mut SqlAndArgs) {
        let Where(expressions) = self;
        for (index, expression) in expressions.iter().enumerate() {
            expression.to_sql(sql);
            if index < (expressions.len() - 1) {
                sql.append_syntax(" AND ");
            }
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        match &self {
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::BinaryArrayOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                sql.append_syntax("(");
                for (index, item) in right.iter().enumerate() {
                    item.to_sql(sql);
                    if index < (right.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
                sql.append_syntax(")");
            }
            Expression::UnaryOperation { column, operator } => {
                column.to_sql(sql);
                operator.to_sql(sql);
            }
            Expression::Or(expressions) => {
                sql.append_syntax("(");
                for (index, expression) in expressions.iter().enumerate() {
                    expression.to_sql(sql);
                    if index < (expressions.len() - 1) {
                        sql.append_syntax(" OR ");
                    }
                }
                sql.append_syntax(")");
            }
            Expression::InSubquery { column, subquery } => {
                column.to_sql(sql);
                sql.append_syntax(" IN (");
                subquery.to_sql(sql);
                sql.append_syntax(")");
            }
        }
    }
}

impl Subquery {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        for (index, select) in self.selects.iter().enumerate() {
            select.to_sql(sql);
            if index < (self.selects.len() - 1) {
                sql.append_syntax(" INTERSECT ");
            }
        }
    }
}

impl SubSelect {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_syntax("SELECT ");
        self.column.to_sql(sql);
        sql.append_syntax(" FROM ");
        self.from.to_sql(sql);
        self.where_.to_sql(sql);
    }
}

impl BinaryOperator {
    pub fn to_sql(self, sql: &mut SqlAndArgs) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::NotEquals => sql.append_syntax(" != "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
            BinaryOperator::Like => sql.append_syntax(" LIKE "),
            BinaryOperator::NotLike => sql.append_syntax(" NOT LIKE "),
        }
    }
}

impl BinaryArrayOperator {
    pub fn to_sql(self, sql: &mut SqlAndArgs) {
        match self {
            BinaryArrayOperator::In => sql.append_syntax(" IN "),
            BinaryArrayOperator::NotIn => sql.append_syntax(" NOT IN "),
        }
    }
}

impl UnaryOperator {
    pub fn to_sql(self, sql: &mut SqlAndArgs) {
        match self {
            UnaryOperator::IsNull => sql.append_syntax(" IS NULL"),
            UnaryOperator::IsNotNull => sql.append_syntax(" IS NOT NULL"),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_param(self.clone());
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, order_by_item) in self.elements.iter().enumerate() {
                order_by_item.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        self.target.to_sql(sql);
        self.direction.to_sql(sql);
    }
}

impl OrderByDirection {
    pub fn to_sql(self, sql: &mut SqlAndArgs) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

impl Limit {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        match self.limit {
            None => (),
            Some(limit) => {
                sql.append_syntax(" LIMIT ");
                sql.append_syntax(format!("{limit}").as_str());
            }
        };
        match self.offset {
            None => (),
            Some(offset) => {
                sql.append_syntax(" OFFSET ");
                sql.append_syntax(format!("{offset}").as_str());
            }
        };
    }
}

// names
impl TableName {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SqlAndArgs) {
        sql.append_identifier(&self.0);
    }
}
