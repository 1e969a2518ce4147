//! Filter coefficient acquisition.
//!
//! Coefficients are read from a local file. If the file does not exist
//! they are fetched once from a configured URL, written to that file and
//! then parsed. Every failure is returned to the caller; there is no retry
//! and no fallback filter.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::coefficients::FilterCoefficients;
use crate::downsample::AntiAliasFilter;
use crate::error::Error;
use crate::DEFAULT_FILTER_PATH;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the coefficient file path.
pub const FILTER_PATH_ENV: &str = "DECIMATE_FILTER_PATH";

/// Environment variable holding the coefficient download URL.
pub const FILTER_URL_ENV: &str = "DECIMATE_FILTER_URL";

fn default_timeout() -> Duration {
    FETCH_TIMEOUT
}

fn default_use_proxy() -> bool {
    true
}

/// Where to find filter coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSourceConfig {
    /// Local coefficient file. Written after a successful download.
    pub path: PathBuf,
    /// Download location used when `path` does not exist.
    #[serde(default)]
    pub url: Option<String>,
    /// Overall timeout of the download (default: 30s).
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    /// Honor the system proxy settings when downloading (default: true).
    #[serde(default = "default_use_proxy")]
    pub use_proxy: bool,
}

impl FilterSourceConfig {
    /// Creates a configuration with the default timeout.
    pub fn new(path: impl Into<PathBuf>, url: Option<String>) -> Self {
        Self {
            path: path.into(),
            url,
            timeout: FETCH_TIMEOUT,
            use_proxy: true,
        }
    }

    /// Builds a configuration from `DECIMATE_FILTER_PATH` and `DECIMATE_FILTER_URL`.
    ///
    /// The path falls back to [`DEFAULT_FILTER_PATH`]; an unset or empty URL
    /// disables downloading.
    pub fn from_env() -> Self {
        let path = std::env::var(FILTER_PATH_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER_PATH.to_string());
        let url = std::env::var(FILTER_URL_ENV).ok().filter(|u| !u.is_empty());
        Self::new(path, url)
    }
}

/// Loads coefficients from the configured file, downloading it first if absent.
pub async fn load_coefficients(config: &FilterSourceConfig) -> Result<FilterCoefficients, Error> {
    let text = match tokio::fs::read_to_string(&config.path).await {
        Ok(text) => {
            info!(path = %config.path.display(), "Reading filter coefficients from file");
            text
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let Some(url) = config.url.as_deref() else {
                error!(path = %config.path.display(), "Coefficient file missing and no URL configured");
                return Err(Error::ResourceUnavailable(format!(
                    "{} does not exist and no download URL is configured",
                    config.path.display()
                )));
            };
            let text = fetch(url, config).await?;
            persist(&config.path, &text).await?;
            text
        }
        Err(e) => {
            error!(path = %config.path.display(), error = %e, "Failed to read coefficient file");
            return Err(Error::Io(e));
        }
    };

    let coefficients = FilterCoefficients::parse(&text).map_err(|e| {
        error!(path = %config.path.display(), error = %e, "Failed to parse filter coefficients");
        e
    })?;

    info!(taps = coefficients.len(), "Filter coefficients loaded");
    Ok(coefficients)
}

async fn fetch(url: &str, config: &FilterSourceConfig) -> Result<String, Error> {
    info!(url = %url, "Fetching filter coefficients");

    let mut builder = reqwest::Client::builder().timeout(config.timeout);
    if !config.use_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    let response = client.get(url).send().await.map_err(|e| {
        error!(url = %url, error = %e, "Coefficient download failed");
        Error::Http(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        error!(url = %url, status = %status, "Coefficient download rejected");
        return Err(Error::ResourceUnavailable(format!("{} returned {}", url, status)));
    }

    let body = response.text().await?;
    debug!(url = %url, bytes = body.len(), "Filter coefficients downloaded");
    Ok(body)
}

/// Writes `text` to `path` through a temporary sibling file and a rename.
async fn persist(path: &Path, text: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "coefficients".to_string());
    let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));

    tokio::fs::write(&tmp, text).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(Error::Io(e));
    }

    debug!(path = %path.display(), bytes = text.len(), "Filter coefficients saved");
    Ok(())
}

/// Loads coefficients on first use and keeps them for the life of the loader.
///
/// A failed load is not cached; the next call tries again.
#[derive(Debug)]
pub struct CoefficientLoader {
    config: FilterSourceConfig,
    cached: OnceCell<FilterCoefficients>,
}

impl CoefficientLoader {
    pub fn new(config: FilterSourceConfig) -> Self {
        Self {
            config,
            cached: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &FilterSourceConfig {
        &self.config
    }

    /// Returns the coefficients, loading them if this is the first call.
    pub async fn get(&self) -> Result<&FilterCoefficients, Error> {
        self.cached
            .get_or_try_init(|| load_coefficients(&self.config))
            .await
    }

    /// Returns an [`AntiAliasFilter`] built from the loaded coefficients.
    pub async fn filter(&self) -> Result<AntiAliasFilter, Error> {
        Ok(AntiAliasFilter::new(self.get().await?.clone()))
    }

    /// Returns true once coefficients have been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.cached.initialized()
    }
}
