//! Prompt template loading. Templates are required setup artifacts:
//! a missing file aborts the run instead of degrading.

use std::path::Path;

use verdict_core::errors::{PipelineError, VerdictResult};

/// The three stage templates, loaded once at startup.
#[derive(Debug, Clone)]
pub struct PromptSet {
    pub supporter: String,
    pub critic: String,
    pub judge: String,
}

impl PromptSet {
    /// Load `supporter.txt`, `critic.txt`, and `judge.txt` from `dir`.
    pub fn load(dir: &Path) -> VerdictResult<Self> {
        Ok(Self {
            supporter: read_template(dir, "supporter.txt")?,
            critic: read_template(dir, "critic.txt")?,
            judge: read_template(dir, "judge.txt")?,
        })
    }
}

fn read_template(dir: &Path, name: &str) -> VerdictResult<String> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(PipelineError::PromptNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(std::fs::read_to_string(&path)?)
}
