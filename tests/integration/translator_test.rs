//! Translation integration tests.
//!
//! Tests the translator end to end with deterministic model clients.

use intellisql::config::LlmConfig;
use intellisql::error::IntelliSqlError;
use intellisql::llm::{strip_code_fences, MockLlmClient, Translator};
use pretty_assertions::assert_eq;

fn mock_translator(client: MockLlmClient) -> Translator {
    Translator::new(Box::new(client))
}

#[tokio::test]
async fn test_translate_with_mock_provider_config() {
    let config = LlmConfig {
        provider: "mock".to_string(),
        ..Default::default()
    };
    let translator = Translator::from_config(&config).unwrap();

    let sql = translator.translate("How many students are there?").await.unwrap();

    assert_eq!(sql, "SELECT COUNT(*) FROM STUDENTS;");
}

#[tokio::test]
async fn test_translate_output_is_clean() {
    let responses = [
        "```sql\nSELECT 1;\n```",
        "```\nSELECT 1;\n```",
        "SELECT 1;",
        "  SELECT 1;  \n",
        "```SQL SELECT 1;```",
    ];

    for (i, response) in responses.iter().enumerate() {
        let client = MockLlmClient::new().with_response("case", *response);
        let sql = mock_translator(client)
            .translate(&format!("case {i}"))
            .await
            .unwrap();
        assert_eq!(sql, "SELECT 1;", "response {:?}", response);
    }
}

#[tokio::test]
async fn test_translate_failure_is_translation_error() {
    let err = mock_translator(MockLlmClient::failing("Invalid API key"))
        .translate("Show all students")
        .await
        .unwrap_err();

    assert!(matches!(err, IntelliSqlError::Translation(_)));
    assert_eq!(err.category(), "Translation Error");
}

#[tokio::test]
async fn test_missing_api_key_fails_on_first_call() {
    let config = LlmConfig {
        provider: "gemini".to_string(),
        api_key: None,
        ..Default::default()
    };

    // Construction succeeds without credentials.
    let translator = Translator::from_config(&config).unwrap();

    let err = translator.translate("Show all students").await.unwrap_err();
    assert!(matches!(err, IntelliSqlError::Translation(_)));
}

#[test]
fn test_strip_is_idempotent_on_model_shapes() {
    let inputs = [
        "```sql\nSELECT * FROM STUDENTS;\n```",
        "``````",
        "```sql\n```sql\nSELECT 1;\n```\n```",
        "SELECT '```' AS ticks;",
        "\n\n```python\nprint(1)\n```\n",
    ];

    for input in inputs {
        let once = strip_code_fences(input);
        assert_eq!(strip_code_fences(&once), once, "input {:?}", input);
    }
}

#[test]
fn test_strip_keeps_interior_backticks() {
    assert_eq!(
        strip_code_fences("SELECT '```' AS ticks;"),
        "SELECT '```' AS ticks;"
    );
}
