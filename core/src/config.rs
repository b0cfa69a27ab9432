//! Client configuration (`config.toml` in the platform config directory)
//!
//! Settings are stored in TOML. Missing fields take their defaults, and two
//! environment variables override the file:
//!
//! - `CHRONOS_API_BASE_URL`: backend base URL
//! - `CHRONOS_TOKEN`: bearer token attached to every request

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Proxy target used by the local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3053";

pub const BASE_URL_ENV: &str = "CHRONOS_API_BASE_URL";
pub const TOKEN_ENV: &str = "CHRONOS_TOKEN";

const CONFIG_FILE: &str = "config.toml";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for every endpoint path (default: `http://localhost:3053`).
    /// An empty string sends paths as-is, for proxy-routed setups.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Session bearer token (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            token: None,
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document, normalizing the base URL.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: ClientConfig = toml::from_str(content)?;
        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Takes the lookup as a closure so tests don't have to touch the
    /// process environment.
    pub fn apply_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = var(BASE_URL_ENV) {
            self.base_url = normalize_base_url(&base_url);
        }
        if let Some(token) = var(TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
        self
    }
}

/// Trim whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Chronos\config`
/// On macOS: `~/Library/Application Support/io.chronos.Chronos`
/// On Linux: `~/.config/Chronos`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.chronos", "", "Chronos")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from disk, then applies environment overrides.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> ClientConfig {
    load_file().apply_env(|name| std::env::var(name).ok())
}

/// Loads `config.toml` exactly as stored, without environment overrides.
pub fn load_file() -> ClientConfig {
    config_dir().map(|dir| load_from(&dir)).unwrap_or_default()
}

/// Loads `config.toml` from `dir`, falling back to defaults.
pub fn load_from(dir: &Path) -> ClientConfig {
    let Ok(content) = std::fs::read_to_string(dir.join(CONFIG_FILE)) else {
        return ClientConfig::default();
    };
    match ClientConfig::from_toml(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e);
            ClientConfig::default()
        }
    }
}

/// Saves the configuration to disk.
///
/// Writes `config.toml` to the platform's configuration directory and
/// returns the path written. Creates the directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if there is no configuration directory, or if the
/// directory cannot be created or the file cannot be written.
pub fn save(config: &ClientConfig) -> std::io::Result<PathBuf> {
    save_to(&require_config_dir()?, config)
}

/// Saves the configuration as `config.toml` inside `dir`.
pub fn save_to(dir: &Path, config: &ClientConfig) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let content = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    let path = dir.join(CONFIG_FILE);
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Persist a session token, leaving every other stored setting untouched.
///
/// Environment and command-line overrides are never written back.
pub fn store_token(token: &str) -> std::io::Result<PathBuf> {
    store_token_in(&require_config_dir()?, token)
}

/// [`store_token`] against an explicit directory.
pub fn store_token_in(dir: &Path, token: &str) -> std::io::Result<PathBuf> {
    let mut config = load_from(dir);
    config.token = Some(token.to_string());
    save_to(dir, &config)
}

fn require_config_dir() -> std::io::Result<PathBuf> {
    config_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no configuration directory (home directory unknown)",
        )
    })
}
