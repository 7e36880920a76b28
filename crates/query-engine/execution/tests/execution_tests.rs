use std::sync::Mutex;

use async_trait::async_trait;
use doytoql_configuration::Configuration;
use doytoql_models::QueryRequest;
use query_engine_execution::error::DatabaseError;
use query_engine_execution::execution::{execute, handle, ExecutionResult};
use query_engine_execution::executor::{Executor, ResultRow};
use query_engine_execution::metrics::{initialise_metrics, Metrics};
use query_engine_execution::response::Response;
use query_engine_metadata::metadata::Metadata;
use query_engine_sql::sql::string::SqlAndArgs;
use query_engine_translation::translation;
use similar_asserts::assert_eq;

/// Records every statement it is given and answers with canned results.
#[derive(Default)]
struct RecordingExecutor {
    statements: Mutex<Vec<String>>,
    fail_with: Option<DatabaseError>,
}

impl RecordingExecutor {
    fn record(&self, statement: &SqlAndArgs) -> Result<(), DatabaseError> {
        self.statements.lock().unwrap().push(statement.sql.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn recorded(&self) -> Vec<String> {
        let mut statements = self.statements.lock().unwrap().clone();
        // the page and the count run concurrently
        statements.sort();
        statements
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn query(&self, statement: &SqlAndArgs) -> Result<Vec<ResultRow>, DatabaseError> {
        self.record(statement)?;
        let row = serde_json::json!({"id": 1, "username": "f0rb"});
        Ok(vec![row.as_object().cloned().unwrap_or_default()])
    }

    async fn count(&self, statement: &SqlAndArgs) -> Result<u64, DatabaseError> {
        self.record(statement)?;
        Ok(5)
    }

    async fn update(&self, statement: &SqlAndArgs) -> Result<u64, DatabaseError> {
        self.record(statement)?;
        Ok(u64::try_from(statement.args.len()).unwrap_or(0))
    }
}

fn metrics() -> Metrics {
    initialise_metrics(&mut prometheus::Registry::new()).unwrap()
}

fn request(json: serde_json::Value) -> QueryRequest {
    serde_json::from_value(json).unwrap()
}

#[tokio::test]
async fn query_returns_page_and_total() {
    let executor = RecordingExecutor::default();
    let metrics = metrics();
    let request = request(serde_json::json!({
        "operation": "query",
        "domain": "user",
        "filters": {"validEq": true},
        "page": {"pageNumber": 1, "pageSize": 10}
    }));
    let plan = translation::query::translate(&Metadata::empty(), &request).unwrap();

    let result = execute(&executor, &metrics, plan).await.unwrap();

    let ExecutionResult::Page { list, total } = result else {
        panic!("expected a page");
    };
    assert_eq!(list.len(), 1);
    assert_eq!(total, 5);
    assert_eq!(
        executor.recorded(),
        vec![
            "SELECT * FROM t_user WHERE valid = ? LIMIT 10 OFFSET 0".to_string(),
            "SELECT COUNT(*) FROM t_user WHERE valid = ?".to_string(),
        ]
    );
    assert_eq!(metrics.query_total.get(), 1);
    assert_eq!(metrics.mutation_total.get(), 0);
}

#[tokio::test]
async fn mutations_return_affected_rows() {
    let executor = RecordingExecutor::default();
    let metrics = metrics();
    let request = request(serde_json::json!({
        "operation": "delete",
        "domain": "user",
        "filters": {"idIn": [1, 2, 3]}
    }));

    let response = handle(&Configuration::default(), &executor, &metrics, &request).await;

    assert_eq!(response, Response::success(ExecutionResult::Affected(3)));
    assert_eq!(
        executor.recorded(),
        vec!["DELETE FROM t_user WHERE id IN (?, ?, ?)".to_string()]
    );
    assert_eq!(metrics.mutation_total.get(), 1);
}

#[tokio::test]
async fn translation_errors_never_reach_the_database() {
    let executor = RecordingExecutor::default();
    let metrics = metrics();
    let request = request(serde_json::json!({"operation": "update", "domain": "user", "data": [{}]}));

    let response = handle(&Configuration::default(), &executor, &metrics, &request).await;

    assert_eq!(
        serde_json::to_value(response).unwrap(),
        serde_json::json!({
            "success": false,
            "code": 1002,
            "message": "Data should contain at least one field."
        })
    );
    assert!(executor.recorded().is_empty());
    assert_eq!(metrics.error_total.get(), 1);
}

#[tokio::test]
async fn database_errors_are_reported() {
    let executor = RecordingExecutor {
        fail_with: Some(DatabaseError::new("unique_violation", "duplicate key")),
        ..RecordingExecutor::default()
    };
    let metrics = metrics();
    let request = request(serde_json::json!({
        "operation": "insert",
        "domain": "user",
        "data": [{"username": "f0rb"}]
    }));

    let response = handle(&Configuration::default(), &executor, &metrics, &request).await;

    assert_eq!(
        serde_json::to_value(response).unwrap(),
        serde_json::json!({
            "success": false,
            "code": 1,
            "message": "unique_violation: duplicate key"
        })
    );
    assert_eq!(metrics.error_total.get(), 1);
    assert_eq!(metrics.mutation_total.get(), 0);
}
