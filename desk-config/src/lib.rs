//! Configuration for Prompt Desk sessions.
//!
//! A [`SessionConfig`] carries the defaults a session starts from and the seed
//! data it is populated with. Configuration is read from JSON and can be
//! adjusted through environment variables.

#![warn(missing_docs, clippy::pedantic)]

mod seed;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use seed::{SeedCategory, SeedData, SeedPrompt};

/// Environment variable overriding [`SessionConfig::log_filter`].
pub const LOG_FILTER_ENV: &str = "PROMPT_DESK_LOG_FILTER";
/// Environment variable overriding [`SessionConfig::default_category_color`].
pub const CATEGORY_COLOR_ENV: &str = "PROMPT_DESK_CATEGORY_COLOR";

const DEFAULT_CATEGORY_COLOR: &str = "#FF6B6B";
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {source}")]
    Io {
        /// Source [`std::io::Error`].
        #[from]
        source: std::io::Error,
    },
    /// The configuration document was not valid JSON for this schema.
    #[error("failed to parse config: {source}")]
    Parse {
        /// Source [`serde_json::Error`].
        #[from]
        source: serde_json::Error,
    },
}

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings a session is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Colour offered for new categories when the user has not picked one.
    pub default_category_color: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Data the session is populated with at start-up.
    pub seed: SeedData,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_category_color: DEFAULT_CATEGORY_COLOR.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            seed: SeedData::default(),
        }
    }
}

impl SessionConfig {
    /// Returns the default configuration populated with the sample library.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            seed: SeedData::sample(),
            ..Self::default()
        }
    }

    /// Parses configuration from a JSON document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or
    /// carries an unknown key.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file can not be read and
    /// [`ConfigError::Parse`] when it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup. Blank values are ignored.
    #[must_use]
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter;
        }
        if let Some(color) = lookup(CATEGORY_COLOR_ENV).filter(|v| !v.trim().is_empty()) {
            self.default_category_color = color;
        }
        self
    }
}
