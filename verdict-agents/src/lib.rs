//! # verdict-agents
//!
//! The sequential debate pipeline: supporter gathers pro evidence,
//! critic gathers counter evidence, judge grounds its verdict in
//! retrieved fallacy rules. Provider failures degrade to neutral
//! values so a run always terminates with a printable verdict.

pub mod generator;
pub mod pipeline;
pub mod prompts;
pub mod stages;
pub mod template;
pub mod tools;

pub use generator::OpenAiGenerator;
pub use pipeline::DebatePipeline;
pub use prompts::PromptSet;
pub use tools::ToolRegistry;
