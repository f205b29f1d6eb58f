//! Statement execution integration tests.
//!
//! Tests classification, result shapes, and commit behavior against a real
//! database file.

use intellisql::config::DatabaseConfig;
use intellisql::db::Value;
use intellisql::query::{ExecutionResult, QueryExecutor, SUCCESS_MESSAGE};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Helper to create an executor over a fresh database file.
fn test_executor() -> (TempDir, QueryExecutor) {
    let dir = tempfile::tempdir().unwrap();
    let executor = QueryExecutor::new(&DatabaseConfig::new(dir.path().join("data.db")));
    (dir, executor)
}

fn status() -> ExecutionResult {
    ExecutionResult::Status {
        message: SUCCESS_MESSAGE.to_string(),
    }
}

#[tokio::test]
async fn test_database_file_created_on_first_use() {
    let (dir, executor) = test_executor();
    let path = dir.path().join("data.db");
    assert!(!path.exists());

    executor.execute("SELECT 1").await;

    assert!(path.exists());
}

#[tokio::test]
async fn test_student_table_round_trip() {
    let (_dir, executor) = test_executor();

    assert_eq!(
        executor
            .execute("CREATE TABLE STUDENTS (Name TEXT, Class TEXT, Marks INTEGER)")
            .await,
        status()
    );
    assert_eq!(
        executor
            .execute(
                "INSERT INTO STUDENTS VALUES ('Asha', 'Data Science', 91), ('Ravi', 'DevOps', 78)"
            )
            .await,
        status()
    );

    let result = executor
        .execute("select Name, Marks from STUDENTS where Marks > 80")
        .await;

    assert_eq!(
        result,
        ExecutionResult::Rows {
            data: vec![vec![Value::from("Asha"), Value::Int(91)]],
            columns: vec!["Name".to_string(), "Marks".to_string()],
        }
    );
}

#[tokio::test]
async fn test_writes_persist_across_calls() {
    let (dir, executor) = test_executor();
    executor.execute("CREATE TABLE t (x REAL)").await;
    executor.execute("INSERT INTO t VALUES (1.5)").await;

    // A second executor on the same file sees the committed row.
    let other = QueryExecutor::new(&DatabaseConfig::new(dir.path().join("data.db")));
    assert_eq!(
        other.execute("SELECT x FROM t").await,
        ExecutionResult::Rows {
            data: vec![vec![Value::Float(1.5)]],
            columns: vec!["x".to_string()],
        }
    );
}

#[tokio::test]
async fn test_mixed_case_select_is_read() {
    let (_dir, executor) = test_executor();

    let result = executor.execute("  SeLeCt 'a' AS letter, NULL AS nothing").await;

    assert_eq!(
        result,
        ExecutionResult::Rows {
            data: vec![vec![Value::from("a"), Value::Null]],
            columns: vec!["letter".to_string(), "nothing".to_string()],
        }
    );
}

#[tokio::test]
async fn test_non_select_read_is_status() {
    let (_dir, executor) = test_executor();

    // Only a SELECT prefix counts as a read.
    assert_eq!(executor.execute("PRAGMA user_version").await, status());
    assert_eq!(
        executor
            .execute("WITH x AS (SELECT 1) SELECT * FROM x")
            .await,
        status()
    );
}

#[tokio::test]
async fn test_syntax_error_is_failure() {
    let (_dir, executor) = test_executor();

    match executor.execute("SELEKT * FROM t").await {
        ExecutionResult::Failure { message } => {
            assert!(message.starts_with("Error: "));
            assert!(message.contains("syntax error"));
        }
        other => panic!("Expected Failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_refusal_text_is_failure() {
    let (_dir, executor) = test_executor();

    let result = executor
        .execute("I don't understand that instruction. Could you please rephrase it?")
        .await;

    assert!(result.is_failure());
}

#[tokio::test]
async fn test_blob_values() {
    let (_dir, executor) = test_executor();

    let result = executor.execute("SELECT x'DEADBEEF' AS b").await;

    assert_eq!(
        result,
        ExecutionResult::Rows {
            data: vec![vec![Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef])]],
            columns: vec!["b".to_string()],
        }
    );
}

#[tokio::test]
async fn test_concurrent_executions_use_independent_connections() {
    let (_dir, executor) = test_executor();
    executor.execute("CREATE TABLE t (n INTEGER)").await;

    let mut handles = Vec::new();
    for n in 0..8 {
        let executor = executor.clone();
        handles.push(tokio::spawn(async move {
            executor
                .execute(&format!("INSERT INTO t VALUES ({n})"))
                .await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), status());
    }

    assert_eq!(
        executor.execute("SELECT COUNT(*) AS n FROM t").await,
        ExecutionResult::Rows {
            data: vec![vec![Value::Int(8)]],
            columns: vec!["n".to_string()],
        }
    );
}

#[tokio::test]
async fn test_multi_statement_write_commits_nothing() {
    let (_dir, executor) = test_executor();
    executor.execute("CREATE TABLE t (n INTEGER)").await;

    let result = executor
        .execute("INSERT INTO t VALUES (1); INSERT INTO missing VALUES (2)")
        .await;
    assert!(result.is_failure());

    assert_eq!(
        executor.execute("SELECT COUNT(*) AS c FROM t").await,
        ExecutionResult::Rows {
            data: vec![vec![Value::Int(0)]],
            columns: vec!["c".to_string()],
        }
    );
}

#[tokio::test]
async fn test_select_cannot_carry_a_hidden_write() {
    let (_dir, executor) = test_executor();
    executor.execute("CREATE TABLE t (n INTEGER)").await;

    let result = executor.execute("SELECT 1 AS a; DROP TABLE t").await;
    assert_eq!(
        result,
        ExecutionResult::Failure {
            message: "Error: You can only execute one statement at a time.".to_string()
        }
    );

    assert_eq!(
        executor.execute("SELECT * FROM t").await,
        ExecutionResult::Rows {
            data: vec![],
            columns: vec!["n".to_string()],
        }
    );
}

#[tokio::test]
async fn test_two_selects_are_rejected() {
    let (_dir, executor) = test_executor();

    let result = executor.execute("SELECT 1 AS a; SELECT 2 AS b, 3 AS c").await;

    assert!(result.is_failure());
}

#[tokio::test]
async fn test_trigger_with_body_runs_as_one_statement() {
    let (_dir, executor) = test_executor();
    executor.execute("CREATE TABLE t (n INTEGER)").await;
    executor.execute("CREATE TABLE audit (n INTEGER)").await;

    assert_eq!(
        executor
            .execute(
                "CREATE TRIGGER t_audit AFTER INSERT ON t BEGIN \
                 INSERT INTO audit VALUES (new.n); END;"
            )
            .await,
        status()
    );
    executor.execute("INSERT INTO t VALUES (7)").await;

    assert_eq!(
        executor.execute("SELECT n FROM audit").await,
        ExecutionResult::Rows {
            data: vec![vec![Value::Int(7)]],
            columns: vec!["n".to_string()],
        }
    );
}

#[tokio::test]
async fn test_semicolon_inside_literal_is_single_statement() {
    let (_dir, executor) = test_executor();

    assert_eq!(
        executor.execute("SELECT 'a;b' AS s;").await,
        ExecutionResult::Rows {
            data: vec![vec![Value::from("a;b")]],
            columns: vec!["s".to_string()],
        }
    );
}
