//! Halve the sample rate of a signal, with or without anti-aliasing.
//!
//! [`decimate`] keeps every other sample. [`downsample`] first low-pass
//! filters the signal by convolving it with caller-supplied FIR taps
//! ("same"-size output, see [`convolve_same`]) and then decimates.
//!
//! Filter taps are plain data. Pass them in directly, or use
//! [`CoefficientLoader`] to read them from a file that is downloaded on
//! first use.
//!
//! # Example
//!
//! ```no_run
//! use rust_decimate::{CoefficientLoader, FilterSourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rust_decimate::Error> {
//!     let loader = CoefficientLoader::new(FilterSourceConfig::from_env());
//!     let filter = loader.filter().await?;
//!
//!     let signal: Vec<f64> = (0..1000).map(|i| (i % 50) as f64 / 50.0).collect();
//!     let halved = filter.downsample(&signal);
//!     assert_eq!(halved.len(), 500);
//!     Ok(())
//! }
//! ```

mod coefficients;
mod convolve;
mod decimate;
mod downsample;
mod error;
pub mod loader;

pub use coefficients::FilterCoefficients;
pub use convolve::convolve_same;
pub use decimate::{decimate, decimate_by};
pub use downsample::{downsample, downsample_pcm16, downsample_pcm16_base64, AntiAliasFilter};
pub use error::Error;
pub use loader::{load_coefficients, CoefficientLoader, FilterSourceConfig};

/// Default local file holding filter coefficients.
pub const DEFAULT_FILTER_PATH: &str = "kaiser_filter_32.txt";
