//! Embedding blob encoding and cosine distance.

/// Convert an f32 slice to bytes (little-endian).
pub fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert little-endian bytes back to an f32 vector.
pub fn bytes_to_f32_vec(bytes: &[u8], dims: usize) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .take(dims)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Cosine distance in `[0, 2]`; 0 means identical direction.
/// A zero-norm vector on either side yields the maximum distance.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += (*x as f64) * (*y as f64);
        norm_a += (*x as f64) * (*x as f64);
        norm_b += (*y as f64) * (*y as f64);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 2.0;
    }
    1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_round_trip() {
        let v = vec![0.25f32, -1.5, 3.0, 0.0];
        let bytes = f32_vec_to_bytes(&v);
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes_to_f32_vec(&bytes, 4), v);
    }

    #[test]
    fn identical_vectors_have_zero_distance() {
        let v = vec![0.6f32, 0.8];
        assert!(cosine_distance(&v, &v).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_unit_distance() {
        let a = vec![1.0f32, 0.0];
        let b = vec![0.0f32, 1.0];
        assert!((cosine_distance(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_is_maximally_distant() {
        let a = vec![0.0f32, 0.0];
        let b = vec![1.0f32, 0.0];
        assert_eq!(cosine_distance(&a, &b), 2.0);
    }
}
