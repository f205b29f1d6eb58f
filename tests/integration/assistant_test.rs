//! Query Assistant session integration tests.
//!
//! Drives a session through generate and execute cycles the way the
//! interactive front end does.

use intellisql::assistant::{AssistantOutput, QueryAssistant, QUERY_SUCCESS_MESSAGE};
use intellisql::config::DatabaseConfig;
use intellisql::db::Value;
use intellisql::llm::{MockLlmClient, Translator};
use intellisql::query::QueryExecutor;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn test_assistant(client: MockLlmClient) -> (TempDir, QueryAssistant) {
    let dir = tempfile::tempdir().unwrap();
    let assistant = QueryAssistant::new(
        Translator::new(Box::new(client)),
        QueryExecutor::new(&DatabaseConfig::new(dir.path().join("data.db"))),
    );
    (dir, assistant)
}

#[tokio::test]
async fn test_generated_sql_is_not_executed_until_asked() {
    let (dir, mut assistant) = test_assistant(MockLlmClient::new());

    assistant.handle_input("Create a students table").await;
    assert_eq!(
        assistant.pending_sql(),
        Some("CREATE TABLE STUDENTS (Name TEXT, Class TEXT, Marks INTEGER);")
    );

    // Nothing has touched the database yet.
    assert!(!dir.path().join("data.db").exists());

    let outputs = assistant.handle_input("/execute").await;
    assert_eq!(outputs, vec![AssistantOutput::success("Executed successfully!")]);
}

#[tokio::test]
async fn test_hand_written_sql_flow() {
    let (_dir, mut assistant) = test_assistant(MockLlmClient::new());

    assistant
        .handle_input("/sql CREATE TABLE EMPLOYEE (Name TEXT, Age INTEGER, Salary REAL)")
        .await;
    assistant.handle_input("/execute").await;
    assistant
        .handle_input("/sql INSERT INTO EMPLOYEE VALUES ('Meera', 29, 5200.5)")
        .await;
    assistant.handle_input("/execute").await;
    assistant.handle_input("/sql SELECT * FROM EMPLOYEE").await;

    let outputs = assistant.handle_input("/execute").await;

    assert_eq!(
        outputs,
        vec![
            AssistantOutput::success(QUERY_SUCCESS_MESSAGE),
            AssistantOutput::Table {
                columns: vec!["Name".into(), "Age".into(), "Salary".into()],
                rows: vec![vec![
                    Value::from("Meera"),
                    Value::Int(29),
                    Value::Float(5200.5),
                ]],
            },
        ]
    );
}

#[tokio::test]
async fn test_generation_error_then_recovery() {
    let (_dir, mut failing) = test_assistant(MockLlmClient::failing("quota exceeded"));

    let outputs = failing.handle_input("Show all students").await;
    assert!(matches!(&outputs[..], [AssistantOutput::Error(_)]));
    assert_eq!(failing.pending_sql(), None);

    let outputs = failing.handle_input("/execute").await;
    assert!(matches!(&outputs[..], [AssistantOutput::Error(_)]));
}

#[tokio::test]
async fn test_table_output_renders() {
    let (_dir, mut assistant) = test_assistant(MockLlmClient::new());

    assistant.handle_input("/sql SELECT 1 AS one").await;
    let outputs = assistant.handle_input("/run").await;

    let rendered: Vec<String> = outputs.iter().map(AssistantOutput::render).collect();
    assert_eq!(rendered[0], "✓ Query executed successfully!");
    assert!(rendered[1].contains("│ one  │"));
    assert!(rendered[1].ends_with("1 row returned"));
}
