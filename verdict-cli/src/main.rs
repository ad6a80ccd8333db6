//! `verdict` — multi-agent debate decision advisor.
//!
//! `verdict ingest --source rules.txt` chunks the rules document and
//! builds the vector store; `verdict run --claim "..."` evaluates a
//! claim through the supporter → critic → judge pipeline and prints
//! the final verdict JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use verdict_agents::{DebatePipeline, OpenAiGenerator, PromptSet, ToolRegistry};
use verdict_core::config::VerdictConfig;
use verdict_core::traits::IGenerator;
use verdict_embeddings::HashedTermFrequency;
use verdict_retrieval::{chunker, Retriever};
use verdict_storage::VectorStore;

mod logging;

#[derive(Parser)]
#[command(name = "verdict", about = "Multi-agent debate decision advisor", version)]
struct Cli {
    /// Optional TOML configuration file; defaults apply when absent
    #[arg(long, global = true, default_value = "verdict.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a claim and print the final verdict
    Run {
        /// The claim to evaluate
        #[arg(long)]
        claim: String,

        /// Optional context for the claim
        #[arg(long)]
        context: Option<String>,

        /// Rule snippets retrieved for the judge
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Chunk a rules document and build the vector store
    Ingest {
        /// Plain-text rules document
        #[arg(long)]
        source: PathBuf,

        /// Re-ingest even if the store already holds data
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    let config = VerdictConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Run {
            claim,
            context,
            top_k,
        } => run(config, &claim, context, top_k),
        Command::Ingest { source, force } => ingest(&config, &source, force),
    }
}

fn open_store(config: &VerdictConfig) -> Result<VectorStore> {
    let provider = Box::new(HashedTermFrequency::new(config.rag.embedding_dimensions));
    Ok(VectorStore::open(
        &config.rag.persist_directory,
        &config.rag.collection_name,
        provider,
    )?)
}

fn run(
    mut config: VerdictConfig,
    claim: &str,
    context: Option<String>,
    top_k: Option<usize>,
) -> Result<()> {
    if let Some(top_k) = top_k {
        config.pipeline.top_k = top_k;
    }

    let store = open_store(&config)?;
    let retriever = Retriever::new(Box::new(store), config.rag.chunks_path.clone());
    let prompts = PromptSet::load(&config.pipeline.prompts_dir)?;
    let generator: Arc<dyn IGenerator> =
        Arc::new(OpenAiGenerator::from_env(config.pipeline.llm.clone())?);
    let registry = ToolRegistry::with_defaults(Arc::clone(&generator))?;

    let mut pipeline = DebatePipeline::new(
        config.pipeline.clone(),
        prompts,
        registry,
        generator,
        retriever,
    );

    let state = pipeline.run_debate(claim, context)?;
    println!(
        "{}",
        serde_json::to_string_pretty(state.final_verdict.value())?
    );
    Ok(())
}

fn ingest(config: &VerdictConfig, source: &Path, force: bool) -> Result<()> {
    let raw = std::fs::read_to_string(source)
        .with_context(|| format!("source document not found: {}", source.display()))?;

    let chunks = chunker::chunk_text(&raw, config.rag.chunk_size, config.rag.overlap)?;
    chunker::save_chunks(&chunks, &config.rag.chunks_path)?;

    let store = open_store(config)?;
    let mut retriever = Retriever::new(Box::new(store), config.rag.chunks_path.clone());
    retriever.ingest_if_needed(force)?;

    info!(
        chunks = chunks.len(),
        collection = %config.rag.collection_name,
        "ingestion complete"
    );
    println!(
        "Ingested {} chunks into collection '{}'",
        chunks.len(),
        config.rag.collection_name
    );
    Ok(())
}
