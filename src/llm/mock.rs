//! Mock LLM client for testing.
//!
//! Provides deterministic responses based on the instruction embedded in the
//! prompt. Responses are fenced the way instruction-tuned models tend to
//! answer, so the cleanup path is exercised too.

use async_trait::async_trait;

use crate::error::{IntelliSqlError, Result};
use crate::llm::prompt::extract_instruction;
use crate::llm::LlmClient;

/// Mock LLM client that returns canned responses based on input patterns.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient {
    /// Custom response mappings (pattern -> response).
    custom_responses: Vec<(String, String)>,
    /// When set, every call fails with this message.
    failure: Option<String>,
}

impl MockLlmClient {
    /// Creates a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose every call fails with a translation error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Adds a custom response mapping.
    ///
    /// When the instruction contains `pattern`, the mock will return `response`.
    pub fn with_response(
        mut self,
        pattern: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.custom_responses
            .push((pattern.into(), response.into()));
        self
    }

    /// Generates a mock response based on the instruction.
    fn mock_response(&self, input: &str) -> String {
        let input_lower = input.to_lowercase();

        for (pattern, response) in &self.custom_responses {
            if input_lower.contains(&pattern.to_lowercase()) {
                return response.clone();
            }
        }

        if input_lower.contains("create") && input_lower.contains("table") {
            return "```sql\nCREATE TABLE STUDENTS (Name TEXT, Class TEXT, Marks INTEGER);\n```"
                .to_string();
        }

        if (input_lower.contains("insert") || input_lower.contains("add"))
            && input_lower.contains("student")
        {
            return "```sql\nINSERT INTO STUDENTS (Name, Class, Marks) VALUES ('Asha', 'Data Science', 91);\n```"
                .to_string();
        }

        if input_lower.contains("count") && input_lower.contains("student") {
            return "```sql\nSELECT COUNT(*) FROM STUDENTS;\n```".to_string();
        }

        if input_lower.contains("student") {
            return "```sql\nSELECT * FROM STUDENTS;\n```".to_string();
        }

        if input_lower.contains("delete") || input_lower.contains("remove") {
            return "```sql\nDELETE FROM STUDENTS WHERE Marks < 35;\n```".to_string();
        }

        "I don't understand that instruction. Could you please rephrase it?".to_string()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        if let Some(message) = &self.failure {
            return Err(IntelliSqlError::translation(message.clone()));
        }

        let input = extract_instruction(prompt).unwrap_or(prompt);
        Ok(self.mock_response(input))
    }
}
