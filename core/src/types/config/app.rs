use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing configuration, persisted as blogsearch.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub site: SiteConfig,
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("blogsearch.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.min_query_chars == 0 {
            errors.push("search.min_query_chars must be at least 1".to_string());
        }

        if !site_url_is_valid(&self.site.url) {
            errors.push(format!(
                "site.url must be an http(s) URL, got '{}'",
                self.site.url
            ));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: SearchSettings {
                min_query_chars: if self.search.min_query_chars == 0 {
                    defaults.search.min_query_chars
                } else {
                    self.search.min_query_chars
                },
                ..self.search.clone()
            },
            site: SiteConfig {
                title: self.site.title.clone(),
                url: if site_url_is_valid(&self.site.url) {
                    self.site.url.clone()
                } else {
                    defaults.site.url
                },
            },
        }
    }
}

/// Empty means "not configured" and is accepted.
fn site_url_is_valid(url: &str) -> bool {
    url.is_empty() || url.starts_with("http://") || url.starts_with("https://")
}

/// Search widget behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub case_sensitive: bool,
    /// Queries shorter than this (in chars) show nothing.
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    #[serde(default)]
    pub trim_query: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            min_query_chars: default_min_query_chars(),
            trim_query: false,
        }
    }
}

fn default_min_query_chars() -> usize {
    2
}

/// Site identity used by the WebSite structured data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
