//! English-to-SQL translation.
//!
//! Builds the few-shot prompt, sends it to the configured model, and cleans
//! the completion down to a bare statement. No syntactic validation is done:
//! whatever the model says, minus fences, is returned as the statement.

use tracing::{debug, info};

use crate::config::LlmConfig;
use crate::error::{IntelliSqlError, Result};
use crate::llm::{build_prompt, create_client, strip_code_fences, LlmClient};

/// Turns natural-language instructions into SQL statements.
pub struct Translator {
    client: Box<dyn LlmClient>,
}

impl Translator {
    /// Creates a translator around an existing client.
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Creates a translator for the configured provider.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let client = create_client(config)?;
        info!("Translator using provider '{}'", config.provider);
        Ok(Self::new(client))
    }

    /// Translates one instruction into a SQL statement.
    ///
    /// Fails with a translation error when the model call fails or the
    /// cleaned completion is empty.
    pub async fn translate(&self, instruction: &str) -> Result<String> {
        let prompt = build_prompt(instruction);
        let completion = self.client.complete(&prompt).await?;
        debug!("Raw completion: {:?}", completion);

        let sql = strip_code_fences(&completion);
        if sql.is_empty() {
            return Err(IntelliSqlError::translation(
                "The model returned an empty response",
            ));
        }

        Ok(sql)
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").finish_non_exhaustive()
    }
}
