//! Plain decimation: keep every Nth sample, no filtering.
//!
//! Inputs are slices, so anything that is not an ordered, indexable
//! sequence is rejected at compile time. There is no runtime fallback for
//! scalar input.

/// Halves a sequence by keeping the elements at indices 0, 2, 4, ...
///
/// The result has `ceil(input.len() / 2)` elements, in their original
/// order and with their original values. Works for any element type.
///
/// ```
/// use rust_decimate::decimate;
///
/// assert_eq!(decimate(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]), vec![0, 2, 4, 6, 8]);
/// assert_eq!(decimate(&[7]), vec![7]);
/// ```
///
/// A bare value is not a sequence and does not type-check:
///
/// ```compile_fail
/// rust_decimate::decimate(18);
/// ```
pub fn decimate<T: Clone>(input: &[T]) -> Vec<T> {
    decimate_by(input, 2)
}

/// Keeps one element out of every `factor`, starting with the first.
///
/// # Panics
///
/// Panics if `factor` is 0.
pub fn decimate_by<T: Clone>(input: &[T], factor: usize) -> Vec<T> {
    assert!(factor >= 1, "Decimation factor must be at least 1");
    input.iter().step_by(factor).cloned().collect()
}
