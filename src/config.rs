//! Configuration file for the harvester
//!
//! Settings are loaded from YAML. `{{ env.NAME }}` references are resolved
//! from the environment before parsing, and every field has a default, so an
//! empty file is a valid config.
//!
//! ```yaml
//! api_key: "{{ env.YOUTUBE_API_KEY }}"
//! page_size: 50
//! max_pages: 200
//! http:
//!   timeout_seconds: 30
//!   max_retries: 3
//!   retry_backoff:
//!     type: exponential
//!     initial_ms: 100
//!     max_ms: 60000
//! output:
//!   format: csv
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::output::OutputFormat;
use crate::pagination::CollectorConfig;
use crate::template;
use crate::types::BackoffType;
use crate::youtube::{DEFAULT_BASE_URL, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete harvester configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// API key sent with every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Playlist items requested per page (1..=50)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Optional guard against an upstream that never stops paging
    #[serde(default)]
    pub max_pages: Option<usize>,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            page_size: default_page_size(),
            max_pages: None,
            http: HttpConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

impl HarvestConfig {
    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse a config from YAML text, resolving environment references
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::parse_rendered(&template::render(yaml)?)
    }

    /// Parse a config from YAML text, resolving references with `lookup`
    pub fn from_yaml_str_with<F>(yaml: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::parse_rendered(&template::render_with(yaml, lookup)?)
    }

    fn parse_rendered(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "page_size",
                format!("must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size),
            ));
        }
        if self.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be at least 1"));
        }
        if self.http.retry_backoff.initial_ms > self.http.retry_backoff.max_ms {
            return Err(Error::invalid_value(
                "http.retry_backoff",
                "initial_ms must not exceed max_ms",
            ));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        Ok(())
    }

    /// The API key, or an error naming the ways to provide one
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::config(
                    "No API key: set api_key in the config file, pass --api-key, or export YOUTUBE_API_KEY",
                )
            })
    }

    /// HTTP client settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let backoff = &self.http.retry_backoff;
        HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.http.timeout_seconds))
            .max_retries(self.http.max_retries)
            .backoff(
                backoff.backoff_type,
                Duration::from_millis(backoff.initial_ms),
                Duration::from_millis(backoff.max_ms),
            )
            .build()
    }

    /// Collector settings derived from this config
    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            max_pages: self.max_pages,
        }
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

/// Backoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60000
}

// ============================================================================
// Output Config
// ============================================================================

/// Output defaults, overridable from the command line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File format; guessed from the path extension when unset
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Destination file; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    /// Resolve the format for an output path
    pub fn format_for(&self, path: Option<&Path>) -> OutputFormat {
        self.format
            .or_else(|| path.map(OutputFormat::from_path))
            .unwrap_or_default()
    }
}
