//! The shape of an incoming query request.

use serde::{Deserialize, Serialize};

use crate::value::{Mapping, Row};

/// A request to compile one statement (or, for `query`, a page plus its total count).
///
/// `operation` and `domain` are optional at this level so that their absence
/// is reported by the compiler with a precise error instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Row>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_route: Option<DomainRoute>,
}

impl QueryRequest {
    pub fn new(operation: impl Into<String>, domain: impl Into<String>) -> Self {
        QueryRequest {
            operation: Some(operation.into()),
            domain: Some(domain.into()),
            ..QueryRequest::default()
        }
    }
}

/// Paging and ordering for a `query` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// `col[,asc|desc]` entries separated by `;`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// A chain of domains linked pairwise by many-to-many join tables.
///
/// The compiled predicate restricts the request's domain to rows related,
/// through every join table of the chain, to rows of the far-end domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRoute {
    pub path: Vec<String>,
    #[serde(default)]
    pub reverse: bool,
    /// Filters scoped to the route. A `<domain>Query` key holds a mapping
    /// for an intermediate or leaf domain; any other key starting with the
    /// leaf domain name is a direct predicate on the innermost join table.
    #[serde(default)]
    pub filters: Mapping,
    /// Column selected from the leaf domain table for a `<leaf>Query` mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_domain_id_column: Option<String>,
}
