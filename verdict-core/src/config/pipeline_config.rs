use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap.
    pub max_tokens: usize,
    /// Environment variable the API key is read from.
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            temperature: defaults::DEFAULT_LLM_TEMPERATURE,
            max_tokens: defaults::DEFAULT_LLM_MAX_TOKENS,
            api_key_env: constants::LLM_API_KEY_ENV.to_string(),
        }
    }
}

/// Ordered evidence-tool lists per agent role. The judge has no entry:
/// it grounds itself on retrieved rules only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub supporter: Vec<String>,
    pub critic: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let default_tools = vec![
            "web_search".to_string(),
            "encyclopedia".to_string(),
            "news_summary".to_string(),
            "topic_classifier".to_string(),
        ];
        Self {
            supporter: default_tools.clone(),
            critic: default_tools,
        }
    }
}

/// Agent pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory holding supporter.txt / critic.txt / judge.txt.
    pub prompts_dir: PathBuf,
    /// Rule snippets retrieved for the judge.
    pub top_k: usize,
    /// Per-query snippet count for batch retrieval.
    pub batch_top_k: usize,
    pub llm: LlmConfig,
    pub tools: ToolsConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            prompts_dir: PathBuf::from(defaults::DEFAULT_PROMPTS_DIR),
            top_k: constants::DEFAULT_TOP_K,
            batch_top_k: constants::DEFAULT_BATCH_TOP_K,
            llm: LlmConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}
