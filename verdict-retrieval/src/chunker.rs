//! Character-window chunker for the rules document.

use std::path::Path;

use tracing::info;

use verdict_core::errors::{RetrievalError, VerdictResult};
use verdict_core::models::Chunk;

/// Collapse all runs of whitespace to single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `text` into overlapping chunks of `chunk_size` characters,
/// advancing by `chunk_size - overlap` per step. The final chunk may be
/// shorter than `chunk_size`; ids are sequential `chunk_<n>`.
///
/// Windows are measured in Unicode scalar values, so multi-byte text
/// never splits inside a code point.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> VerdictResult<Vec<Chunk>> {
    // A non-positive step would never terminate.
    if chunk_size == 0 || overlap >= chunk_size {
        return Err(RetrievalError::InvalidChunking {
            chunk_size,
            overlap,
        }
        .into());
    }

    let normalized: Vec<char> = normalize_whitespace(text).chars().collect();
    let step = chunk_size - overlap;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < normalized.len() {
        let end = (start + chunk_size).min(normalized.len());
        let window: String = normalized[start..end].iter().collect();
        chunks.push(Chunk::new(chunks.len(), window));
        start += step;
    }

    Ok(chunks)
}

/// Write chunks to a JSON array file, creating parent directories.
pub fn save_chunks(chunks: &[Chunk], path: &Path) -> VerdictResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(chunks)?;
    std::fs::write(path, json)?;
    info!(chunks = chunks.len(), path = %path.display(), "chunks saved");
    Ok(())
}

/// Load chunks from a JSON array file. A missing file is a fatal setup
/// error; so is a file that doesn't parse as `[{id, text}, ...]`.
pub fn load_chunks(path: &Path) -> VerdictResult<Vec<Chunk>> {
    if !path.exists() {
        return Err(RetrievalError::ChunksNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        RetrievalError::MalformedChunks {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_whitespace_runs() {
        assert_eq!(
            normalize_whitespace("a  b\t\tc\n\nd"),
            "a b c d"
        );
    }

    #[test]
    fn thousand_chars_with_defaults_yields_two_chunks() {
        let text: String = "x".repeat(1000);
        let chunks = chunk_text(&text, 700, 150).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].id, "chunk_0");
        assert_eq!(chunks[0].text, text[0..700]);
        assert_eq!(chunks[1].id, "chunk_1");
        assert_eq!(chunks[1].text, text[550..1000]);
    }

    #[test]
    fn short_text_yields_single_short_chunk() {
        let chunks = chunk_text("just a few words", 700, 150).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "just a few words");
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        let chunks = chunk_text("   \n\t  ", 700, 150).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn overlap_equal_to_size_is_rejected() {
        let err = chunk_text("some text", 100, 100).unwrap_err();
        assert!(err.to_string().contains("invalid chunking"));
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(chunk_text("some text", 0, 0).is_err());
    }

    #[test]
    fn multibyte_text_does_not_split_code_points() {
        let text = "héllo wörld ".repeat(40);
        let chunks = chunk_text(&text, 50, 10).unwrap();
        // Reassembling the windows must not panic or mangle characters.
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 50);
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("verdict-chunks-{}", std::process::id()));
        let path = dir.join("chunks.json");
        let chunks = chunk_text(&"word ".repeat(300), 200, 50).unwrap();

        save_chunks(&chunks, &path).unwrap();
        let loaded = load_chunks(&path).unwrap();
        assert_eq!(loaded, chunks);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_chunks_file_is_fatal() {
        let err = load_chunks(Path::new("/nonexistent/chunks.json")).unwrap_err();
        assert!(matches!(
            err,
            verdict_core::errors::VerdictError::Retrieval(
                RetrievalError::ChunksNotFound { .. }
            )
        ));
    }
}
