//! How domain names map onto tables, join tables and columns.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The marker substituted by a domain name in naming templates.
pub const PLACEHOLDER: &str = "{}";

const DEFAULT_TABLE_FORMAT: &str = "t_{}";
const DEFAULT_JOIN_TABLE_FORMAT: &str = "j_{}_and_{}";
const DEFAULT_JOIN_ID_FORMAT: &str = "{}_id";
const DEFAULT_ID_COLUMN: &str = "id";

/// Naming templates used to resolve tables and columns from domain names.
///
/// Templates contain `{}` placeholders which are filled left to right.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamingConvention {
    /// Table name of a domain, e.g. `t_{}`.
    #[serde(default = "default_table_format")]
    pub table_format: String,
    /// Join table name of an ordered pair of domains, e.g. `j_{}_and_{}`.
    #[serde(default = "default_join_table_format")]
    pub join_table_format: String,
    /// Column a domain contributes to the join tables it takes part in, e.g. `{}_id`.
    #[serde(default = "default_join_id_format")]
    pub join_id_format: String,
    /// Primary key column of every domain table.
    #[serde(default = "default_id_column")]
    pub id_column: String,
    /// Map `userName` to `user_name` when deriving column names from keys.
    #[serde(default = "default_map_camel_case_to_underscore")]
    pub map_camel_case_to_underscore: bool,
}

fn default_table_format() -> String {
    DEFAULT_TABLE_FORMAT.to_string()
}

fn default_join_table_format() -> String {
    DEFAULT_JOIN_TABLE_FORMAT.to_string()
}

fn default_join_id_format() -> String {
    DEFAULT_JOIN_ID_FORMAT.to_string()
}

fn default_id_column() -> String {
    DEFAULT_ID_COLUMN.to_string()
}

fn default_map_camel_case_to_underscore() -> bool {
    true
}

impl Default for NamingConvention {
    fn default() -> Self {
        NamingConvention {
            table_format: default_table_format(),
            join_table_format: default_join_table_format(),
            join_id_format: default_join_id_format(),
            id_column: default_id_column(),
            map_camel_case_to_underscore: default_map_camel_case_to_underscore(),
        }
    }
}

impl NamingConvention {
    pub fn table_name(&self, domain: &str) -> String {
        fill_template(&self.table_format, &[domain])
    }

    pub fn join_table_name(&self, left: &str, right: &str) -> String {
        fill_template(&self.join_table_format, &[left, right])
    }

    pub fn join_id_column(&self, domain: &str) -> String {
        fill_template(&self.join_id_format, &[domain])
    }

    /// Derive a column name from a field name, folding case when configured.
    pub fn column_name(&self, field: &str) -> String {
        if self.map_camel_case_to_underscore {
            camel_case_to_underscore(field)
        } else {
            field.to_string()
        }
    }
}

/// Number of `{}` placeholders in a template.
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

/// Replace the placeholders of `template` with `args`, left to right.
/// Placeholders without a matching argument are left as they are.
fn fill_template(template: &str, args: &[&str]) -> String {
    let capacity = template.len() + args.iter().map(|arg| arg.len()).sum::<usize>();
    let mut filled = String::with_capacity(capacity);
    let mut rest = template;
    for arg in args {
        match rest.split_once(PLACEHOLDER) {
            Some((head, tail)) => {
                filled.push_str(head);
                filled.push_str(arg);
                rest = tail;
            }
            None => break,
        }
    }
    filled.push_str(rest);
    filled
}

/// `permName` becomes `perm_name`; names without upper case letters are unchanged.
pub fn camel_case_to_underscore(field: &str) -> String {
    let mut column = String::with_capacity(field.len() + 4);
    for ch in field.chars() {
        if ch.is_ascii_uppercase() {
            if !column.is_empty() {
                column.push('_');
            }
            column.push(ch.to_ascii_lowercase());
        } else {
            column.push(ch);
        }
    }
    column
}
