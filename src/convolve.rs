//! Linear convolution with "same"-size output.

use tracing::warn;

/// Convolves `signal` with `kernel`, returning `signal.len()` samples.
///
/// The result is the slice of the full linear convolution that starts at
/// offset `(kernel.len() - 1) / 2`:
///
/// `y[i] = sum_k kernel[k] * signal[i + (M - 1) / 2 - k]`
///
/// with samples outside the signal taken as zero. Odd kernels are
/// centered exactly. An even kernel has its extra tap reaching before the
/// start of the signal, matching numpy's `convolve(..., mode="same")`.
///
/// The output length never depends on the kernel length. An empty kernel
/// produces all zeros, an empty signal produces an empty output.
///
/// ```
/// use rust_decimate::convolve_same;
///
/// assert_eq!(convolve_same(&[2.0, 4.0, 6.0, 8.0], &[0.5, 0.5]), vec![1.0, 3.0, 5.0, 7.0]);
/// ```
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let m = kernel.len();

    if n == 0 {
        return Vec::new();
    }
    if m == 0 {
        warn!(signal_len = n, "Convolving with an empty kernel, output is all zeros");
        return vec![0.0; n];
    }

    let center = (m - 1) / 2;

    (0..n)
        .map(|i| {
            // Position in the full convolution of length n + m - 1.
            let pos = i + center;
            let k_lo = (pos + 1).saturating_sub(n);
            let k_hi = pos.min(m - 1);
            (k_lo..=k_hi).map(|k| kernel[k] * signal[pos - k]).sum()
        })
        .collect()
}
