//! Cosine similarity over dense term-weight vectors.
//!
//! The recommendation engine compares articles through their TF-IDF vectors;
//! this module provides the single similarity measure it ranks on.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::similarity::cosine_similarity;
//!
//! let a = [1.0, 2.0, 3.0];
//! let b = [2.0, 3.0, 4.0];
//!
//! let sim = cosine_similarity(&a, &b).expect("equal-length vectors");
//! assert!(sim > 0.9);
//! ```

use crate::error::{RecomendarError, Result};

/// Compute cosine similarity between two equal-length vectors.
///
/// Measures the angle between two vectors in n-dimensional space:
/// - 1 = identical direction (very similar)
/// - 0 = orthogonal (unrelated)
/// - -1 = opposite direction
///
/// For the non-negative TF-IDF weights this crate produces, the result is
/// always in `[0, 1]`.
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// # Errors
///
/// Returns [`RecomendarError::DimensionMismatch`] when the lengths differ.
/// Mismatched vectors were built against different vocabulary snapshots and
/// are incomparable; callers must not treat the error as a low score.
///
/// A zero vector on either side yields `Ok(0.0)`: a vector with no weighted
/// terms is defined as orthogonal to everything, so no NaN ever escapes this
/// function.
///
/// # Examples
///
/// ```
/// use recomendar::similarity::cosine_similarity;
///
/// let v = [1.0, 2.0, 3.0];
/// let sim = cosine_similarity(&v, &v).expect("equal lengths");
/// assert!((sim - 1.0).abs() < 1e-10);
///
/// // Zero vectors are orthogonal to everything, not NaN.
/// let zero = [0.0, 0.0, 0.0];
/// assert_eq!(cosine_similarity(&zero, &v).expect("equal lengths"), 0.0);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecomendarError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();

    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}
