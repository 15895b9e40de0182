//! Configuration management for docnav.
//!
//! Parses `docnav.toml` with serde and provides auto-discovery of the config
//! file in parent directories.
//!
//! ```toml
//! [site]
//! site_url = "https://docs.example.com"
//! path_prefix = "/"
//! title = "Example Docs"
//! docs_location = "https://github.com/example/docs/tree/main/content"
//!
//! [sidebar]
//! forced_nav_order = ["/introduction", "/guides"]
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `site.site_url` and `site.docs_location` support `${VAR}` and
//! `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use docnav_core::ForcedOrder;
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Sidebar navigation settings.
    pub sidebar: SidebarConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site-wide settings used for canonical and edit links.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public base URL of the site, without trailing slash.
    pub site_url: String,
    /// Path the site is mounted under. `/` means the site root.
    pub path_prefix: String,
    /// Site title.
    pub title: String,
    /// Base URL for "edit this page" links, e.g. a GitHub tree URL.
    pub docs_location: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "http://localhost".to_owned(),
            path_prefix: "/".to_owned(),
            title: "Documentation".to_owned(),
            docs_location: None,
        }
    }
}

/// Sidebar navigation settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Exact slugs and `/section` prefixes pinned to the top of the navigation.
    pub forced_nav_order: Vec<String>,
}

impl SidebarConfig {
    /// Forced navigation order ready for ordering.
    #[must_use]
    pub fn forced_order(&self) -> ForcedOrder {
        ForcedOrder::new(self.forced_nav_order.iter().cloned())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.site_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

fn require_leading_slash(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with '/', got {value:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `docnav.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// Applies the same expansion, normalization and validation as
    /// [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion, or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            forced_keys = config.sidebar.forced_nav_order.len(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_sidebar()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.site_url, "site.site_url")?;
        require_http_url(&self.site.site_url, "site.site_url")?;
        require_leading_slash(&self.site.path_prefix, "site.path_prefix")?;

        if let Some(ref docs_location) = self.site.docs_location {
            require_non_empty(docs_location, "site.docs_location")?;
        }

        Ok(())
    }

    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        for (i, key) in self.sidebar.forced_nav_order.iter().enumerate() {
            require_leading_slash(key, &format!("sidebar.forced_nav_order[{i}]"))?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.site_url = expand::expand_env(&self.site.site_url, "site.site_url")?;

        if let Some(ref docs_location) = self.site.docs_location {
            self.site.docs_location =
                Some(expand::expand_env(docs_location, "site.docs_location")?);
        }

        Ok(())
    }

    /// Trim trailing slashes from base URLs so joined links get one separator.
    fn normalize(&mut self) {
        let trimmed = self.site.site_url.trim_end_matches('/').len();
        self.site.site_url.truncate(trimmed);

        if let Some(ref mut docs_location) = self.site.docs_location {
            let trimmed = docs_location.trim_end_matches('/').len();
            docs_location.truncate(trimmed);
        }
    }
}
