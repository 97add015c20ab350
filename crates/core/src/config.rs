//! Engine configuration via `stickers.toml`
//!
//! A single flat file in the data directory. On first run a commented default
//! is written; edit it and restart to change behavior.

use crate::error::{Error, Result};
use crate::limits::{
    ResultCap, DEFAULT_DEBOUNCE_MS, DEFAULT_RECENT_CAPACITY, DEFAULT_SAMPLE_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "stickers.toml";

/// Storage key used by the manifest-driven deployment (`[tag, file]` pairs).
pub const RECENT_PAIRS_KEY: &str = "recentlyUsed";

/// Storage key used by the id-driven deployment (bare sticker ids).
pub const RECENT_IDS_KEY: &str = "recently-used-stickers";

/// How the result list is filled when no keyword is typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultViewPolicy {
    /// Recency list if non-empty, otherwise one fixed bucket
    RecencyOrFallback {
        /// Bucket key shown when nothing was used yet
        fallback_bucket: String,
    },
    /// Recency list followed by a random sample of other stickers
    RecencyPlusRandomFill {
        /// Requested number of sampled stickers
        sample_size: usize,
    },
}

/// `[default_view]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultViewConfig {
    /// `"recency_or_fallback"` or `"recency_plus_random_fill"`
    #[serde(default = "default_policy_str")]
    pub policy: String,
    /// Bucket used by `recency_or_fallback` (default: "a")
    #[serde(default = "default_fallback_bucket")]
    pub fallback_bucket: String,
    /// Sample size used by `recency_plus_random_fill` (default: 32)
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_policy_str() -> String {
    "recency_or_fallback".to_string()
}

fn default_fallback_bucket() -> String {
    "a".to_string()
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

impl Default for DefaultViewConfig {
    fn default() -> Self {
        Self {
            policy: default_policy_str(),
            fallback_bucket: default_fallback_bucket(),
            sample_size: default_sample_size(),
        }
    }
}

/// Engine configuration loaded from `stickers.toml`.
///
/// # Example
///
/// ```toml
/// result_cap = 100
/// recent_capacity = 12
/// manifest = "stickers.csv"
///
/// [default_view]
/// policy = "recency_plus_random_fill"
/// sample_size = 32
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickersConfig {
    /// Maximum results per search; `0` disables the cap.
    #[serde(default)]
    pub result_cap: ResultCap,
    /// Recency list capacity.
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,
    /// Storage key for the recency list.
    #[serde(default = "default_recent_key")]
    pub recent_key: String,
    /// Quiet period before a typed keyword is searched.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Skip a scheduled search whose keyword equals the previous one.
    #[serde(default)]
    pub distinct_until_changed: bool,
    /// Manifest path, relative to `data_dir`.
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Optional list-of-manifests file; overrides `manifest` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_list: Option<String>,
    /// Directory holding manifests, images and the recency store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Default view policy.
    #[serde(default)]
    pub default_view: DefaultViewConfig,
}

fn default_recent_capacity() -> usize {
    DEFAULT_RECENT_CAPACITY
}

fn default_recent_key() -> String {
    RECENT_PAIRS_KEY.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_manifest() -> String {
    "stickers.csv".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for StickersConfig {
    fn default() -> Self {
        Self {
            result_cap: ResultCap::default(),
            recent_capacity: default_recent_capacity(),
            recent_key: default_recent_key(),
            debounce_ms: default_debounce_ms(),
            distinct_until_changed: false,
            manifest: default_manifest(),
            manifest_list: None,
            data_dir: default_data_dir(),
            default_view: DefaultViewConfig::default(),
        }
    }
}

impl StickersConfig {
    /// Parse the `[default_view]` section into a policy.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown policy name or a zero sample size.
    pub fn default_view_policy(&self) -> Result<DefaultViewPolicy> {
        let view = &self.default_view;
        match view.policy.as_str() {
            "recency_or_fallback" => Ok(DefaultViewPolicy::RecencyOrFallback {
                fallback_bucket: view.fallback_bucket.clone(),
            }),
            "recency_plus_random_fill" => {
                if view.sample_size == 0 {
                    return Err(Error::Config(
                        "default_view.sample_size must be at least 1".to_string(),
                    ));
                }
                Ok(DefaultViewPolicy::RecencyPlusRandomFill {
                    sample_size: view.sample_size,
                })
            }
            other => Err(Error::Config(format!(
                "Invalid default_view.policy '{}'. Expected \"recency_or_fallback\" or \"recency_plus_random_fill\".",
                other
            ))),
        }
    }

    /// Debounce quiet period as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Check every field that has a constrained range.
    pub fn validate(&self) -> Result<()> {
        if self.recent_capacity == 0 {
            return Err(Error::Config(
                "recent_capacity must be at least 1".to_string(),
            ));
        }
        if self.recent_key.is_empty() {
            return Err(Error::Config("recent_key must not be empty".to_string()));
        }
        self.default_view_policy()?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Stickers configuration
#
# Maximum results per search (default: 100). 0 = unbounded.
result_cap = 100

# Recently used stickers kept for the default view (default: 12)
recent_capacity = 12

# Storage key for the recency list
#   "recentlyUsed"           = [tag, file] pairs
#   "recently-used-stickers" = bare sticker ids
recent_key = "recentlyUsed"

# Quiet period after the last keystroke before searching (default: 200)
debounce_ms = 200

# Skip a search whose keyword equals the previous one (default: false)
distinct_until_changed = false

# Manifest of "file,tag1,tag2,..." lines, relative to data_dir
manifest = "stickers.csv"

# Optional file listing several manifests, one path per line
# manifest_list = "manifests.txt"

data_dir = "."

[default_view]
# "recency_or_fallback" or "recency_plus_random_fill"
policy = "recency_or_fallback"
fallback_bucket = "a"
sample_size = 32
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: StickersConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
