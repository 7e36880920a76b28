use doytoql_cli::{compile, run, Command};
use similar_asserts::assert_eq;

#[tokio::test]
async fn initialize_writes_configuration_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let mut output = Vec::new();

    run(Command::Initialize, dir.path(), &mut output).await.unwrap();

    assert!(dir.path().join("configuration.json").exists());
    assert!(dir.path().join("schema.json").exists());
    let parsed = doytoql_configuration::parse_configuration(dir.path())
        .await
        .unwrap();
    assert_eq!(parsed, doytoql_configuration::ParsedConfiguration::initial());
}

#[tokio::test]
async fn initialize_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let mut output = Vec::new();
    run(Command::Initialize, dir.path(), &mut output).await.unwrap();

    let result = run(Command::Initialize, dir.path(), &mut output).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn compile_prints_statements_and_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let request_file = dir.path().join("request.json");
    std::fs::write(
        &request_file,
        r#"{"operation": "query", "domain": "user", "filters": {"usernameStart": "f0"}}"#,
    )
    .unwrap();
    let mut output = Vec::new();

    run(
        Command::Compile {
            request: Some(request_file),
            pretty: false,
        },
        dir.path(),
        &mut output,
    )
    .await
    .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "SELECT * FROM t_user WHERE username LIKE ?\n[\"f0%\"]\nSELECT COUNT(*) FROM t_user WHERE username LIKE ?\n[\"f0%\"]\n"
    );
}

#[tokio::test]
async fn compile_uses_the_configuration() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("configuration.json"),
        r#"{"version": "1", "metadata": {"naming": {"tableFormat": "{}s"}}}"#,
    )
    .unwrap();
    let mut output = Vec::new();

    compile(
        dir.path(),
        r#"{"operation": "delete", "domain": "user", "filters": {"id": 7}}"#,
        false,
        &mut output,
    )
    .await
    .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "DELETE FROM users WHERE id = ?\n[7]\n"
    );
}

#[tokio::test]
async fn compile_pretty_prints() {
    let dir = tempfile::tempdir().unwrap();
    let mut output = Vec::new();

    compile(
        dir.path(),
        r#"{"operation": "delete", "domain": "user", "filters": {"id": 7}}"#,
        true,
        &mut output,
    )
    .await
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains('\n'));
    assert!(output.ends_with("[7]\n"));
    assert!(output.contains("t_user"));
}

#[tokio::test]
async fn compile_reports_translation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut output = Vec::new();

    let error = compile(
        dir.path(),
        r#"{"operation": "update", "domain": "user", "data": []}"#,
        false,
        &mut output,
    )
    .await
    .unwrap_err();

    assert_eq!(
        error.to_string(),
        "DATA_SHOULD_NOT_BE_EMPTY (1001): Data should not be empty."
    );
    assert!(output.is_empty());
}
