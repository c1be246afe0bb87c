use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Listing page for Family Law forms (`filter=FL`).
pub const DEFAULT_LISTING_URL: &str = "https://www.courts.ca.gov/forms.htm?filter=FL";
/// Origin prepended to site-relative document links.
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.courts.ca.gov";
pub const DEFAULT_OUTPUT_DIR: &str = "Family_Law_Forms";
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first). 1 = no retry.
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
        }
    }
}

impl RetryConfig {
    /// Rejects a `base_delay_secs` that is negative, NaN, infinite or too large
    /// for a `Duration`.
    pub fn validate(&self) -> Result<()> {
        Duration::try_from_secs_f64(self.base_delay_secs).with_context(|| {
            format!("invalid [retry] base_delay_secs = {}", self.base_delay_secs)
        })?;
        Ok(())
    }

    /// Never panics: an unrepresentable base delay is clamped to `max_delay_secs`
    /// (NaN and negatives to zero).
    pub fn to_policy(&self) -> RetryPolicy {
        let max_delay = Duration::from_secs(self.max_delay_secs);
        let base_delay = Duration::try_from_secs_f64(self.base_delay_secs.max(0.0))
            .map_or(max_delay, |d| d.min(max_delay));
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay,
            max_delay,
        }
    }
}

/// HTTP client knobs. Unset values leave libcurl's defaults in place (no timeout).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout per request.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Configuration for one pipeline run, loaded from `~/.config/courtforms/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Listing page to scrape.
    pub listing_url: String,
    /// Destination directory for downloaded documents.
    pub output_dir: PathBuf,
    /// Suffix a link's `href` must end with (compared case-insensitively).
    pub file_extension_filter: String,
    /// Origin used to absolutize links that start with `/`.
    pub site_origin: String,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_extension_filter: DEFAULT_EXTENSION.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            http: HttpConfig::default(),
            retry: None,
        }
    }
}

impl FormsConfig {
    /// Effective retry policy; a missing `[retry]` section means a single attempt.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default().to_policy()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("courtforms")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FormsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FormsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<FormsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FormsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    if let Some(retry) = &cfg.retry {
        retry
            .validate()
            .with_context(|| format!("config {}", path.display()))?;
    }
    Ok(cfg)
}
