//! Configuration for the feed pipeline, loaded from a TOML file.
//!
//! The config file is optional: a missing or empty file yields
//! `Config::default()`. Unknown keys are accepted (with `deny_unknown_fields`
//! off), though we log a warning when the file contains potential typos.
use crate::article::SortOrder;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Pipeline configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
///
/// The API key is held as a [`SecretString`], whose `Debug` output is
/// redacted, so the derived `Debug` impl never leaks it into logs.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search endpoint the section queries are built on.
    pub base_url: String,

    /// Guardian API key sent as the `api-key` query parameter.
    /// The default is the public demo key, which is heavily rate limited.
    pub api_key: SecretString,

    /// Section ids to fetch, one request per section (e.g. "technology").
    /// An empty list means nothing is fetched.
    pub sections: Vec<String>,

    /// Requested items per section, kept as the raw preference string.
    /// Anything that does not parse as a positive integer falls back to
    /// the built-in limit when the query URLs are built.
    pub page_size: String,

    /// List order preference: "Newest", "Oldest", or anything else to
    /// leave articles in merge order.
    pub order_by: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://content.guardianapis.com/search".to_string(),
            api_key: SecretString::from("test".to_string()),
            sections: vec![
                "technology".to_string(),
                "science".to_string(),
                "cities".to_string(),
                "world".to_string(),
                "environment".to_string(),
                "global-development".to_string(),
            ],
            page_size: "10".to_string(),
            order_by: "Newest".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = ["base_url", "api_key", "sections", "page_size", "order_by"];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            sections = config.sections.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// The configured sort direction, or `None` for an unrecognized label.
    pub fn sort_order(&self) -> Option<SortOrder> {
        SortOrder::from_label(&self.order_by)
    }
}

// ============================================================================
// Tests
// ============================================================================
