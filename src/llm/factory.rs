//! LLM client factory.
//!
//! Centralizes provider-specific logic for creating LLM clients.

use crate::config::LlmConfig;
use crate::error::Result;
use crate::llm::{
    GeminiClient, GeminiConfig, LlmClient, LlmProvider, MockLlmClient, OllamaClient, OllamaConfig,
    OpenAiClient, OpenAiConfig,
};

/// Creates an LLM client from the resolved configuration.
///
/// A missing API key does not fail here; the client reports it on its first
/// request so startup works without credentials.
pub fn create_client(config: &LlmConfig) -> Result<Box<dyn LlmClient>> {
    let provider = config.provider()?;
    let model = config.model_or_default(provider);

    match provider {
        LlmProvider::Gemini => {
            let mut gemini = GeminiConfig::new(config.api_key.clone(), model);
            if let Some(secs) = config.timeout_secs {
                gemini = gemini.with_timeout(secs);
            }
            Ok(Box::new(GeminiClient::new(gemini)?))
        }
        LlmProvider::OpenAi => {
            let mut openai = OpenAiConfig::new(config.api_key.clone(), model);
            if let Some(secs) = config.timeout_secs {
                openai = openai.with_timeout(secs);
            }
            Ok(Box::new(OpenAiClient::new(openai)?))
        }
        LlmProvider::Ollama => {
            let mut ollama = OllamaConfig::new(model);
            if let Some(url) = &config.base_url {
                ollama = ollama.with_url(url.clone());
            }
            if let Some(secs) = config.timeout_secs {
                ollama = ollama.with_timeout(secs);
            }
            Ok(Box::new(OllamaClient::new(ollama)?))
        }
        LlmProvider::Mock => Ok(Box::new(MockLlmClient::new())),
    }
}
