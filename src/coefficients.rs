//! Filter tap container and its textual format.
//!
//! Coefficients are stored as a bracketed, comma-separated list of
//! floating-point literals, e.g. `[-0.01, 0.12, 0.18, 0.12, -0.01]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The taps of an FIR low-pass filter.
///
/// This crate never designs filters; taps are supplied by the caller or
/// loaded through [`crate::loader`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCoefficients(Vec<f64>);

impl FilterCoefficients {
    /// Wraps the given taps.
    pub fn new(taps: Vec<f64>) -> Self {
        Self(taps)
    }

    /// Parses the bracketed list format.
    ///
    /// Each item is any literal `f64::from_str` accepts, so numpy-style
    /// forms such as `0.`, `.5`, `+0.25` and `1.e-05` are fine.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        if !trimmed.starts_with('[') || !trimmed.ends_with(']') {
            return Err(Error::malformed("expected a list enclosed in '[' and ']'"));
        }

        let inner = trimmed[1..trimmed.len() - 1].trim();
        if inner.is_empty() {
            return Ok(Self(Vec::new()));
        }

        let taps = inner
            .split(',')
            .enumerate()
            .map(|(pos, item)| {
                let item = item.trim();
                let tap: f64 = item.parse().map_err(|_| {
                    Error::malformed(format!("tap {} is not a number: {:?}", pos, item))
                })?;
                if !tap.is_finite() {
                    return Err(Error::malformed(format!("tap {} is not finite", pos)));
                }
                Ok(tap)
            })
            .collect::<Result<Vec<f64>, Error>>()?;

        Ok(Self(taps))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Sum of the taps, i.e. the filter's gain at DC.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl From<Vec<f64>> for FilterCoefficients {
    fn from(taps: Vec<f64>) -> Self {
        Self(taps)
    }
}

impl From<&[f64]> for FilterCoefficients {
    fn from(taps: &[f64]) -> Self {
        Self(taps.to_vec())
    }
}

impl AsRef<[f64]> for FilterCoefficients {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl FromStr for FilterCoefficients {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FilterCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tap) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", tap)?;
        }
        write!(f, "]")
    }
}
