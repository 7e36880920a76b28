//! Translate an incoming `QueryRequest`.

pub mod domain_route;
pub mod filtering;
pub mod helpers;
pub mod mutation;
pub mod operators;
pub mod root;
pub mod sorting;
pub mod values;

use doytoql_models::QueryRequest;
use enum_iterator::Sequence;
use query_engine_metadata::metadata::Metadata;
use query_engine_sql::sql;

use super::error::Error;

/// The kinds of request we can compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Operation {
    Query,
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Query => "query",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Exact, case-sensitive lookup of an operation by name.
    pub fn parse(name: &str) -> Option<Operation> {
        enum_iterator::all::<Operation>().find(|operation| operation.name() == name)
    }
}

/// The operation of a request. A missing or empty operation is an error.
pub fn operation_of(request: &QueryRequest) -> Result<Operation, Error> {
    match request.operation.as_deref() {
        None | Some("") => Err(Error::MissingOperation),
        Some(name) => {
            Operation::parse(name).ok_or_else(|| Error::UnsupportedOperation(name.to_string()))
        }
    }
}

/// The domain of a request. A missing or empty domain is an error, and so
/// is a domain that is not an identifier.
pub fn domain_of(request: &QueryRequest) -> Result<&str, Error> {
    match request.domain.as_deref() {
        None | Some("") => Err(Error::MissingDomain),
        Some(domain) => {
            helpers::check_identifier(domain, domain)?;
            Ok(domain)
        }
    }
}

/// Translate a request into the statements to run.
pub fn translate(
    metadata: &Metadata,
    request: &QueryRequest,
) -> Result<sql::execution_plan::ExecutionPlan, Error> {
    let operation = operation_of(request)?;
    let domain = domain_of(request)?;
    let statement = match operation {
        Operation::Query => root::translate_query(metadata, request)?,
        Operation::Insert => {
            sql::execution_plan::Statement::Insert(mutation::build_insert_sql(metadata, request)?)
        }
        Operation::Update => {
            sql::execution_plan::Statement::Update(mutation::build_update_sql(metadata, request)?)
        }
        Operation::Delete => {
            sql::execution_plan::Statement::Delete(mutation::build_delete_sql(metadata, request)?)
        }
    };

    for compiled in statement.statements() {
        tracing::debug!(
            operation = operation.name(),
            domain,
            sql = compiled.sql.as_str(),
            args = compiled.args.len(),
            "compiled statement"
        );
    }

    Ok(sql::execution_plan::ExecutionPlan {
        domain: domain.to_string(),
        statement,
    })
}
