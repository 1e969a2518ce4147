use base64::Engine;

use crate::coefficients::FilterCoefficients;
use crate::convolve::convolve_same;
use crate::decimate::decimate;
use crate::error::Error;

/// Low-pass filter then halve the sample rate.
///
/// Equivalent to `decimate(&convolve_same(input, coefficients))`, so the
/// output has `ceil(input.len() / 2)` samples. An empty input gives an
/// empty output.
pub fn downsample(input: &[f64], coefficients: &[f64]) -> Vec<f64> {
    decimate(&convolve_same(input, coefficients))
}

/// An anti-aliasing FIR filter bound to a fixed set of taps.
#[derive(Debug, Clone, PartialEq)]
pub struct AntiAliasFilter {
    coefficients: FilterCoefficients,
}

impl AntiAliasFilter {
    /// Creates a filter from the given taps.
    pub fn new(coefficients: impl Into<FilterCoefficients>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// Returns the filter taps.
    pub fn coefficients(&self) -> &FilterCoefficients {
        &self.coefficients
    }

    /// Applies the filter without decimating.
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        convolve_same(input, self.coefficients.as_slice())
    }

    /// Filters and halves the sample rate.
    pub fn downsample(&self, input: &[f64]) -> Vec<f64> {
        downsample(input, self.coefficients.as_slice())
    }
}

impl From<FilterCoefficients> for AntiAliasFilter {
    fn from(coefficients: FilterCoefficients) -> Self {
        Self { coefficients }
    }
}

/// Downsamples 16-bit little-endian PCM by 2 with a low-pass filter.
///
/// Results are rounded and clamped to the `i16` range.
pub fn downsample_pcm16(input: &[u8], coefficients: &[f64]) -> Vec<u8> {
    // Trailing odd byte is dropped
    let samples: Vec<f64> = input
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]) as f64)
        .collect();

    downsample(&samples, coefficients)
        .into_iter()
        .map(|acc| acc.round().clamp(-32768.0, 32767.0) as i16)
        .flat_map(|s| s.to_le_bytes())
        .collect()
}

/// Same as [`downsample_pcm16`] on base64-encoded PCM.
pub fn downsample_pcm16_base64(input: &str, coefficients: &[f64]) -> Result<String, Error> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(input)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(downsample_pcm16(&bytes, coefficients)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcm(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn test_identity_filter_is_plain_decimation() {
        let input = [0.5, -1.0, 2.0, 3.0, -4.5, 6.0, 7.0];
        assert_eq!(downsample(&input, &[1.0]), decimate(&input));
    }

    #[test]
    fn test_two_tap_average() {
        assert_eq!(downsample(&[2.0, 4.0, 6.0, 8.0], &[0.5, 0.5]), vec![1.0, 5.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(downsample(&[], &[0.25, 0.5, 0.25]).is_empty());
    }

    #[test]
    fn test_empty_coefficients() {
        assert_eq!(downsample(&[1.0, 2.0, 3.0], &[]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_output_length() {
        for n in 0..20usize {
            let input: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let out = downsample(&input, &[0.25, 0.5, 0.25]);
            assert_eq!(out.len(), (n + 1) / 2);
        }
    }

    #[test]
    fn test_filter_struct_matches_free_function() {
        let taps = vec![0.25, 0.5, 0.25];
        let filter = AntiAliasFilter::new(taps.clone());
        let input = [1.0, 4.0, 9.0, 16.0, 25.0];

        assert_eq!(filter.filter(&input), convolve_same(&input, &taps));
        assert_eq!(filter.downsample(&input), downsample(&input, &taps));
        assert_eq!(filter.coefficients().as_slice(), &taps[..]);
    }

    #[test]
    fn test_alternating_signal_is_suppressed() {
        // Nyquist-rate component is removed by the [0.25, 0.5, 0.25] kernel.
        let input: Vec<f64> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let out = downsample(&input, &[0.25, 0.5, 0.25]);
        for v in &out[1..out.len() - 1] {
            assert_eq!(*v, 0.0);
        }
        // Naive decimation aliases it to DC.
        assert!(decimate(&input).iter().all(|v| *v == 1.0));
    }

    #[test]
    fn test_pcm16_identity() {
        let input = pcm(&[100, -200, 300, -400, 500]);
        assert_eq!(downsample_pcm16(&input, &[1.0]), pcm(&[100, 300, 500]));
    }

    #[test]
    fn test_pcm16_clamps() {
        let input = pcm(&[i16::MAX, i16::MIN, 1000]);
        assert_eq!(downsample_pcm16(&input, &[2.0]), pcm(&[i16::MAX, 2000]));
        let input = pcm(&[i16::MIN, 0]);
        assert_eq!(downsample_pcm16(&input, &[2.0]), pcm(&[i16::MIN]));
    }

    #[test]
    fn test_pcm16_ignores_trailing_byte() {
        let mut input = pcm(&[10, 20, 30]);
        input.push(0xff);
        assert_eq!(downsample_pcm16(&input, &[1.0]), pcm(&[10, 30]));
    }

    #[test]
    fn test_pcm16_base64() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(pcm(&[1, 2, 3, 4]));
        let out = downsample_pcm16_base64(&encoded, &[1.0]).unwrap();
        let decoded = base64::engine::general_purpose::STANDARD.decode(out).unwrap();
        assert_eq!(decoded, pcm(&[1, 3]));
    }

    #[test]
    fn test_pcm16_base64_rejects_garbage() {
        let result = downsample_pcm16_base64("not base64!!", &[1.0]);
        assert!(matches!(result, Err(Error::Base64(_))));
    }
}
