//! Blocking chat-completions client implementing `IGenerator`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::warn;

use verdict_core::config::LlmConfig;
use verdict_core::errors::{PipelineError, PipelineResult};
use verdict_core::traits::IGenerator;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-compatible chat completions generator.
///
/// Constructed without a key it stays usable: `is_available` reports
/// false and every call errors with `MissingCredential`, which call
/// sites degrade to a neutral value.
pub struct OpenAiGenerator {
    api_key: Option<String>,
    config: LlmConfig,
    client: Client,
}

impl OpenAiGenerator {
    /// Build a generator, reading the API key from the configured
    /// environment variable.
    pub fn from_env(config: LlmConfig) -> PipelineResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!(env_var = %config.api_key_env, "LLM API key not set, generation will degrade");
        }
        Self::new(api_key, config)
    }

    pub fn new(api_key: Option<String>, config: LlmConfig) -> PipelineResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PipelineError::Generation {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            api_key,
            config,
            client,
        })
    }
}

impl IGenerator for OpenAiGenerator {
    fn generate(&self, prompt: &str) -> PipelineResult<String> {
        let Some(key) = &self.api_key else {
            return Err(PipelineError::MissingCredential {
                env_var: self.config.api_key_env.clone(),
            });
        };

        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth).map_err(|e| PipelineError::Generation {
                reason: format!("invalid API key: {e}"),
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .headers(headers)
            .json(&body)
            .send()
            .map_err(|e| PipelineError::Generation {
                reason: format!("chat completions request failed: {e}"),
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp
                .text()
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(PipelineError::Generation {
                reason: format!("provider returned {status}: {text}"),
            });
        }

        let parsed: ChatResponse = resp.json().map_err(|e| PipelineError::Generation {
            reason: format!("failed to parse provider response: {e}"),
        })?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .unwrap_or_default())
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: usize,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}
