//! The `VectorStore`: owns the SQLite connection and the embedding
//! provider, scopes every operation to one collection.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use verdict_core::errors::{StorageError, VerdictResult};
use verdict_core::models::{Chunk, RetrievedSnippet};
use verdict_core::traits::{IChunkStore, IEmbeddingProvider};

use crate::migrations;
use crate::similarity::{bytes_to_f32_vec, cosine_distance, f32_vec_to_bytes};
use crate::sqlite_err;

/// Database file name inside the persist directory.
const DB_FILE: &str = "vectors.sqlite3";

/// SQLite-backed chunk store with embeddings computed on ingestion.
pub struct VectorStore {
    conn: Connection,
    collection: String,
    provider: Box<dyn IEmbeddingProvider>,
}

impl VectorStore {
    /// Open (or create) the store persisted under `persist_directory`.
    ///
    /// The same `(persist_directory, collection_name)` pair always maps
    /// to the same data; a collection that was never written is empty.
    pub fn open(
        persist_directory: &Path,
        collection_name: &str,
        provider: Box<dyn IEmbeddingProvider>,
    ) -> VerdictResult<Self> {
        std::fs::create_dir_all(persist_directory).map_err(|e| StorageError::PersistDirectory {
            path: persist_directory.display().to_string(),
            reason: e.to_string(),
        })?;

        let conn = Connection::open(persist_directory.join(DB_FILE)).map_err(sqlite_err)?;
        let store = Self {
            conn,
            collection: collection_name.to_string(),
            provider,
        };
        store.initialize()?;

        info!(
            directory = %persist_directory.display(),
            collection = collection_name,
            "vector store opened"
        );
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory(
        collection_name: &str,
        provider: Box<dyn IEmbeddingProvider>,
    ) -> VerdictResult<Self> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        let store = Self {
            conn,
            collection: collection_name.to_string(),
            provider,
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> VerdictResult<()> {
        migrations::run_migrations(&self.conn)
    }

    /// Upsert + embed inside a savepoint so a batch is all-or-nothing.
    fn add_chunks_inner(&self, chunks: &[Chunk]) -> VerdictResult<()> {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = self.provider.embed_batch(&texts)?;

        for (chunk, embedding) in chunks.iter().zip(&embeddings) {
            let blob = f32_vec_to_bytes(embedding);
            let dims = embedding.len() as i64;
            self.conn
                .execute(
                    "INSERT INTO chunks (collection, chunk_id, text, embedding, dimensions)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(collection, chunk_id) DO UPDATE SET
                        text = excluded.text,
                        embedding = excluded.embedding,
                        dimensions = excluded.dimensions",
                    params![self.collection, chunk.id, chunk.text, blob, dims],
                )
                .map_err(sqlite_err)?;
        }
        Ok(())
    }
}

impl IChunkStore for VectorStore {
    fn add_chunks(&self, chunks: &[Chunk]) -> VerdictResult<()> {
        self.conn
            .execute_batch("SAVEPOINT add_chunks")
            .map_err(sqlite_err)?;

        match self.add_chunks_inner(chunks) {
            Ok(()) => {
                self.conn
                    .execute_batch("RELEASE add_chunks")
                    .map_err(sqlite_err)?;
                info!(
                    chunks = chunks.len(),
                    collection = %self.collection,
                    provider = self.provider.name(),
                    "chunks ingested"
                );
                Ok(())
            }
            Err(e) => {
                let _ = self.conn.execute_batch("ROLLBACK TO add_chunks");
                let _ = self.conn.execute_batch("RELEASE add_chunks");
                Err(e)
            }
        }
    }

    fn query(&self, text: &str, top_k: usize) -> VerdictResult<Vec<RetrievedSnippet>> {
        let query_embedding = self.provider.embed(text)?;
        let query_dims = query_embedding.len();

        let mut stmt = self
            .conn
            .prepare(
                "SELECT chunk_id, text, embedding, dimensions
                 FROM chunks WHERE collection = ?1",
            )
            .map_err(sqlite_err)?;

        let rows = stmt
            .query_map(params![self.collection], |row| {
                let chunk_id: String = row.get(0)?;
                let text: String = row.get(1)?;
                let blob: Vec<u8> = row.get(2)?;
                let dims: i64 = row.get(3)?;
                Ok((chunk_id, text, blob, dims))
            })
            .map_err(sqlite_err)?;

        let mut scored: Vec<RetrievedSnippet> = Vec::new();
        for row in rows {
            let (chunk_id, text, blob, dims) = row.map_err(sqlite_err)?;
            // Skip rows ingested under a different provider configuration.
            if dims as usize != query_dims {
                continue;
            }
            let stored = bytes_to_f32_vec(&blob, dims as usize);
            scored.push(RetrievedSnippet {
                id: chunk_id,
                text,
                distance: cosine_distance(&query_embedding, &stored),
            });
        }

        // Ascending distance: most similar first.
        scored.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);

        debug!(
            collection = %self.collection,
            results = scored.len(),
            top_k,
            "similarity query"
        );
        Ok(scored)
    }

    fn len(&self) -> VerdictResult<usize> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM chunks WHERE collection = ?1",
                params![self.collection],
                |row| row.get(0),
            )
            .map_err(sqlite_err)?;
        Ok(count as usize)
    }
}
