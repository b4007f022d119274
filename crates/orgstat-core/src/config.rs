// SPDX-License-Identifier: Apache-2.0

//! Configuration management for orgstat.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ORGSTAT_`)
//! 2. Config file: `~/.config/orgstat/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Report on another organization, ordered by open pull requests
//! ORGSTAT_GITHUB__ORGANIZATION=rust-lang ORGSTAT_REPORT__SORT_BY=pull_requests orgstat
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::OrgstatError;
use crate::report::{SortKey, SortOrder};

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where to fetch the listing page from.
    pub github: GitHubConfig,
    /// Report ordering.
    pub report: ReportConfig,
    /// UI preferences.
    pub ui: UiConfig,
}

/// GitHub listing page settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the hosting site.
    pub base_url: String,
    /// Organization whose repositories are listed.
    pub organization: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with the request.
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://github.com".to_string(),
            organization: "esm-tools".to_string(),
            timeout_seconds: 10,
            user_agent: concat!("orgstat/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GitHubConfig {
    /// URL of the organization's repository listing page.
    #[must_use]
    pub fn listing_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.organization
        )
    }
}

/// Report ordering settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Column to order rows by.
    pub sort_by: SortKey,
    /// Direction of the ordering.
    pub order: SortOrder,
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Grid table preceded by the elapsed CPU time.
    #[default]
    Text,
    /// JSON document for programmatic consumption.
    Json,
}

/// UI preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Show a spinner while fetching.
    pub progress_bars: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            progress_bars: true,
        }
    }
}

/// Returns the orgstat configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/orgstat`. Returns `None` when neither
/// is available, so no relative path is ever consulted.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

fn resolve_config_dir(xdg_config: Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(xdg_config) = xdg_config.filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(xdg_config).join("orgstat"));
    }
    home.map(|home| home.join(".config").join("orgstat"))
}

/// Returns the path to the configuration file, if a configuration
/// directory can be determined.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables. Without a
/// home or XDG config directory only defaults and the environment apply.
/// Environment variables use the prefix `ORGSTAT_` and double underscore
/// for nested keys (e.g., `ORGSTAT_REPORT__ORDER`).
///
/// # Errors
///
/// Returns `OrgstatError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, OrgstatError> {
    let mut builder = Config::builder();
    if let Some(config_path) = config_file_path() {
        let file = File::with_name(config_path.to_string_lossy().as_ref()).required(false);
        builder = builder.add_source(file);
    } else {
        debug!("No home directory found; skipping config file");
    }

    let config = builder
        .add_source(
            Environment::with_prefix("ORGSTAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
