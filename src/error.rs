//! Error types for the decimation library.

use thiserror::Error;

/// Error type for coefficient acquisition and byte-level adapters.
///
/// The numeric core (`decimate`, `convolve_same`, `downsample`) is
/// infallible; only I/O and text decoding produce these.
#[derive(Error, Debug)]
pub enum Error {
    /// Local file read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error while fetching coefficients.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The coefficient source could not be reached or returned nothing usable.
    #[error("Coefficient source unavailable: {0}")]
    ResourceUnavailable(String),

    /// Coefficient text could not be parsed.
    #[error("Malformed coefficients: {reason}")]
    MalformedCoefficients {
        /// What was wrong with the text.
        reason: String,
    },

    /// Base64 decoding of PCM input failed.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedCoefficients {
            reason: reason.into(),
        }
    }
}
