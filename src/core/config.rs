//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.herodex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::api::client::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HerodexConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.herodex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".herodex").join("config.toml"))
}

/// Load config from `~/.herodex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HerodexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HerodexConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HerodexConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HerodexConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: HerodexConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Herodex Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# key = "1234567890abcdef"               # Or set SUPERHERO_API_KEY env var
# base_url = "https://superheroapi.com/api"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_key` is from the `--api-key` flag (None = not specified).
pub fn resolve(config: &HerodexConfig, cli_api_key: Option<&str>) -> ResolvedConfig {
    // API key: CLI → env → config
    let api_key = cli_api_key
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SUPERHERO_API_KEY").ok())
        .or_else(|| config.api.key.clone());

    // Base URL: env → config → default
    let base_url = std::env::var("SUPERHERO_API_BASE_URL")
        .ok()
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig { api_key, base_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = HerodexConfig::default();
        assert!(config.api.key.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = HerodexConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = HerodexConfig {
            api: ApiConfig {
                key: Some("file-key".to_string()),
                base_url: Some("http://localhost:9999".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_key.as_deref(), Some("file-key"));
        assert_eq!(resolved.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_resolve_cli_api_key_wins() {
        let config = HerodexConfig {
            api: ApiConfig {
                key: Some("file-key".to_string()),
                base_url: None,
            },
        };
        let resolved = resolve(&config, Some("cli-key"));
        assert_eq!(resolved.api_key.as_deref(), Some("cli-key"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[api]
key = "sparse-key"
"#;
        let config: HerodexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.key.as_deref(), Some("sparse-key"));
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
key = "abc123"
base_url = "http://127.0.0.1:8080"
"#;
        let config: HerodexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.key.as_deref(), Some("abc123"));
        assert_eq!(config.api.base_url.as_deref(), Some("http://127.0.0.1:8080"));
    }
}
