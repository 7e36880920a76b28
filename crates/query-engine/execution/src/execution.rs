//! Execute an execution plan against the database.

use doytoql_configuration::Configuration;
use doytoql_models::QueryRequest;
use query_engine_sql::sql;
use query_engine_translation::translation;
use serde::Serialize;
use tracing::{info_span, Instrument};

use crate::error::Error;
use crate::executor::{Executor, ResultRow};
use crate::metrics::Metrics;
use crate::response::Response;

/// The outcome of a plan: a page with its total, or an affected-row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExecutionResult {
    Page { list: Vec<ResultRow>, total: u64 },
    Affected(u64),
}

/// Run the statements of a plan. The page and the count of a query are
/// independent and run concurrently.
pub async fn execute<E: Executor + ?Sized>(
    executor: &E,
    metrics: &Metrics,
    plan: sql::execution_plan::ExecutionPlan,
) -> Result<ExecutionResult, Error> {
    let domain = plan.domain.as_str();
    let result = match &plan.statement {
        sql::execution_plan::Statement::Query { rows, count } => {
            let (list, total) = tokio::try_join!(
                executor
                    .query(rows)
                    .instrument(info_span!("Fetch rows", domain)),
                executor
                    .count(count)
                    .instrument(info_span!("Count rows", domain)),
            )?;
            metrics.query_total.inc();
            ExecutionResult::Page { list, total }
        }
        sql::execution_plan::Statement::Insert(statement)
        | sql::execution_plan::Statement::Update(statement)
        | sql::execution_plan::Statement::Delete(statement) => {
            let operation = plan.statement.operation_name();
            let affected = executor
                .update(statement)
                .instrument(info_span!("Update rows", domain, operation))
                .await?;
            metrics.mutation_total.inc();
            ExecutionResult::Affected(affected)
        }
    };
    Ok(result)
}

/// Compile and execute a request, reporting failures in the response
/// envelope rather than to the caller.
pub async fn handle<E: Executor + ?Sized>(
    configuration: &Configuration,
    executor: &E,
    metrics: &Metrics,
    request: &QueryRequest,
) -> Response {
    let result: Result<ExecutionResult, Error> = async {
        let plan = translation::query::translate(&configuration.metadata, request)?;
        execute(executor, metrics, plan).await
    }
    .instrument(info_span!("Handle request"))
    .await;

    match result {
        Ok(data) => Response::success(data),
        Err(err) => {
            metrics.error_total.inc();
            tracing::warn!(code = err.code(), name = err.name(), "{err}");
            Response::failure(&err)
        }
    }
}
