//! # verdict-storage
//!
//! Disk-persisted vector store: chunk text plus its embedding in SQLite,
//! nearest-neighbor queries via a brute-force cosine scan. A store is
//! identified by `(persist_directory, collection_name)`; reopening the
//! same pair sees the same data, and a missing collection is simply empty.

mod migrations;
mod similarity;
mod store;

pub use store::VectorStore;

use verdict_core::errors::{StorageError, VerdictError};

/// Map a SQLite error into the storage error type.
pub(crate) fn sqlite_err(e: impl std::fmt::Display) -> VerdictError {
    StorageError::Sqlite {
        message: e.to_string(),
    }
    .into()
}
