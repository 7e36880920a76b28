use std::fs;
use std::path::PathBuf;

use query_engine_translation::translation;

/// A compiled statement: its SQL text and its arguments as JSON.
pub struct Compiled {
    pub sql: String,
    pub args: serde_json::Value,
}

/// Compile `tests/goldenfiles/<testname>/request.json` with the configuration
/// found next to it (or the defaults), and return every statement of the plan.
pub async fn test_translation(testname: &str) -> anyhow::Result<Vec<Compiled>> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let configuration = doytoql_configuration::load_configuration(&directory).await?;
    let metadata = configuration.metadata;

    let request = serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;

    let plan = translation::query::translate(&metadata, &request)?;
    plan.statement
        .statements()
        .into_iter()
        .map(|statement| {
            assert_eq!(
                statement.placeholder_count(),
                statement.args.len(),
                "placeholders and arguments differ in {}",
                statement.sql
            );
            Ok(Compiled {
                sql: statement.sql.clone(),
                args: serde_json::to_value(&statement.args)?,
            })
        })
        .collect()
}

/// Compile a request that holds a single statement.
pub async fn test_single_statement(testname: &str) -> anyhow::Result<Compiled> {
    let mut statements = test_translation(testname).await?;
    assert_eq!(statements.len(), 1, "expected a single statement");
    Ok(statements.remove(0))
}

/// Compile a request that is expected to fail.
pub async fn test_translation_error(testname: &str) -> translation::error::Error {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);
    let request = serde_json::from_str(
        &fs::read_to_string(directory.join("request.json")).expect("request.json"),
    )
    .expect("valid request");
    translation::query::translate(&query_engine_metadata::metadata::Metadata::empty(), &request)
        .expect_err("expected a translation error")
}
