//! Configuration structs. Everything has serde defaults so a partial (or
//! absent) TOML file still yields a working configuration.

mod pipeline_config;
mod rag_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{VerdictError, VerdictResult};

pub use pipeline_config::{LlmConfig, PipelineConfig, ToolsConfig};
pub use rag_config::RagConfig;

pub(crate) mod defaults {
    pub const DEFAULT_PERSIST_DIRECTORY: &str = "data/processed/vectorstore";
    pub const DEFAULT_CHUNKS_PATH: &str = "data/processed/chunks.json";
    pub const DEFAULT_PROMPTS_DIR: &str = "prompts";
    pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
    pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.2;
    pub const DEFAULT_LLM_MAX_TOKENS: usize = 1500;
}

/// Top-level configuration for one advisor process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictConfig {
    pub rag: RagConfig,
    pub pipeline: PipelineConfig,
}

impl VerdictConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> VerdictResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| VerdictError::Config {
            reason: format!("{}: {e}", path.display()),
        })
    }

    /// Load from a TOML file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> VerdictResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
