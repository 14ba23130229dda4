//! Configuration loading and API endpoint resolution
//!
//! Settings follow one priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Missing or malformed config files degrade to defaults with a warning;
//! they never abort startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default backend base URL when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "PDESK_API_URL";

/// Optional settings from `config.toml`
///
/// Unknown keys are ignored so older and newer tools can share one file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Backend base URL
    pub api_url: Option<String>,
    /// Auth token persistence file
    pub token_file: Option<PathBuf>,
    /// Default log filter when RUST_LOG is unset
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Load the config file from its platform location, if present
    pub fn load() -> TomlConfig {
        match existing_config_file() {
            Some(path) => Self::load_from(&path),
            None => TomlConfig::default(),
        }
    }

    /// Load a specific config file, degrading to defaults on any error
    pub fn load_from(path: &Path) -> TomlConfig {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read config file {}: {}", path.display(), e);
                return TomlConfig::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Malformed config file {}: {}", path.display(), e);
                TomlConfig::default()
            }
        }
    }
}

/// Resolve the backend base URL by priority order.
///
/// A trailing slash is trimmed so endpoint paths can join uniformly.
pub fn resolve_api_url(cli_arg: Option<&str>, config: &TomlConfig) -> String {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        return url.trim_end_matches('/').to_string();
    }

    // Priority 2: Environment variable
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    // Priority 3: TOML config file
    if let Some(url) = config.api_url.as_deref() {
        return url.trim_end_matches('/').to_string();
    }

    // Priority 4: Compiled default
    DEFAULT_API_URL.to_string()
}

/// Resolve the auth-token persistence file by priority order
pub fn resolve_token_file(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Some(path) = &config.token_file {
        return path.clone();
    }

    default_config_dir()
        .map(|dir| dir.join("token.json"))
        .unwrap_or_else(|| PathBuf::from("pdesk-token.json"))
}

/// Per-user config directory (`~/.config/pdesk` on Linux)
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pdesk"))
}

/// Find an existing config file: the per-user location first, then the
/// system-wide `/etc/pdesk/config.toml` on Linux
fn existing_config_file() -> Option<PathBuf> {
    if let Some(path) = default_config_dir().map(|dir| dir.join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/pdesk/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}
