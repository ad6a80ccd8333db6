//! Hashed term-frequency embedding provider.
//!
//! Produces fixed-dimension dense vectors by hashing unigrams and
//! adjacent-word bigrams into buckets and weighting by frequency.
//! Not as semantically rich as a neural sentence encoder, but fully
//! deterministic and always available.

use std::collections::HashMap;

use verdict_core::errors::VerdictResult;
use verdict_core::traits::IEmbeddingProvider;

/// Deterministic bag-of-terms embedding provider.
pub struct HashedTermFrequency {
    dimensions: usize,
}

impl HashedTermFrequency {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        // Term frequencies for unigrams, plus adjacent-word bigrams so
        // phrase order contributes to similarity.
        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            *tf.entry(format!("{} {}", pair[0], pair[1])).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // IDF approximation: longer terms are rarer and carry more
            // signal than short (likely stopword) ones.
            let idf = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * idf;
        }

        // L2 normalize so cosine similarity reduces to a dot product.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingProvider for HashedTermFrequency {
    fn embed(&self, text: &str) -> VerdictResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> VerdictResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-term-frequency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = HashedTermFrequency::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn produces_configured_dimensions() {
        let p = HashedTermFrequency::new(384);
        let v = p.embed("the earth is round").unwrap();
        assert_eq!(v.len(), 384);
    }

    #[test]
    fn output_is_normalized() {
        let p = HashedTermFrequency::new(256);
        let v = p.embed("ad hominem attacks the speaker not the argument").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic() {
        let p = HashedTermFrequency::new(256);
        let a = p.embed("deterministic embedding").unwrap();
        let b = p.embed("deterministic embedding").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_matches_individual() {
        let p = HashedTermFrequency::new(128);
        let texts = vec!["hello world".to_string(), "foo bar baz".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            let single = p.embed(text).unwrap();
            assert_eq!(batch[i], single);
        }
    }

    #[test]
    fn identical_text_is_closest() {
        let p = HashedTermFrequency::new(256);
        let target = "a strawman misrepresents the opposing position";
        let a = p.embed(target).unwrap();
        let same = p.embed(target).unwrap();
        let other = p.embed("cooking recipes for pasta dishes").unwrap();

        let cos_same: f32 = a.iter().zip(&same).map(|(x, y)| x * y).sum();
        let cos_other: f32 = a.iter().zip(&other).map(|(x, y)| x * y).sum();
        assert!(cos_same > cos_other);
        assert!((cos_same - 1.0).abs() < 1e-5);
    }

    #[test]
    fn word_order_contributes() {
        let p = HashedTermFrequency::new(512);
        let a = p.embed("dog bites man").unwrap();
        let b = p.embed("man bites dog").unwrap();
        // Same unigrams, different bigrams: similar but not identical.
        assert_ne!(a, b);
    }
}
