//! L2 normalization and dot products for the index.
//!
//! Accumulation is done in f64 so tiny-but-nonzero vectors still normalize.

/// Euclidean length of `v`.
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
}

/// Scale `v` to unit length in place.
///
/// A zero vector (or one whose norm is not finite) is left unchanged; it
/// then scores 0.0 against everything.
pub fn normalize_in_place(v: &mut [f32]) {
    let norm = l2_norm(v);
    if norm > 0.0 && norm.is_finite() {
        for x in v.iter_mut() {
            *x = (f64::from(*x) / norm) as f32;
        }
    }
}

/// Unit-length copy of `v`. See [`normalize_in_place`] for the zero case.
pub fn normalize_vector(v: &[f32]) -> Vec<f32> {
    let mut out = v.to_vec();
    normalize_in_place(&mut out);
    out
}

/// Dot product; equals cosine similarity when both inputs are unit vectors.
/// Callers guarantee equal lengths.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum::<f64>() as f32
}
