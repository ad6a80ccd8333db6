//! # verdict-retrieval
//!
//! The retrieval subsystem: splits the rules document into overlapping
//! chunks, persists them as JSON, and exposes a facade that ingests the
//! chunks into a vector store on demand and answers similarity queries
//! for the judge.

pub mod chunker;
pub mod retriever;

pub use retriever::Retriever;
