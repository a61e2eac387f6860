//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.automata-view/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;

use crate::Mode;
use crate::api::{DEFAULT_BASE_URL, Protocol};
use crate::core::controller::ResponseOrdering;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_mode: Option<Mode>,
    pub ordering: Option<ResponseOrdering>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub protocol: Option<Protocol>,
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub mode: Option<Mode>,
    pub base_url: Option<String>,
    pub protocol: Option<Protocol>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub mode: Mode,
    pub ordering: ResponseOrdering,
    pub base_url: String,
    pub protocol: Protocol,
    /// `None` = wait for the server indefinitely.
    pub timeout: Option<Duration>,
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

/// Returns the path to `~/.automata-view/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".automata-view").join("config.toml"))
}

/// Load config from `~/.automata-view/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AppConfig::default()`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. Missing or malformed files are errors.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Automata View Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_mode = "turing-machine"    # "turing-machine" or "nfa"
# ordering = "latest-request"        # "latest-request" or "arrival"

# [server]
# base_url = "http://127.0.0.1:8000" # Or set AUTOMATA_SERVER_URL
# protocol = "json-body"             # "json-body" or "path-embedded"
# timeout_secs = 10                  # Omit or set to 0 to wait indefinitely
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
pub fn resolve(config: &AppConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, reading environment variables through `env`.
pub fn resolve_with(
    config: &AppConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Mode: CLI → env → config → default
    let mode = cli
        .mode
        .or_else(|| parse_env(&env, "AUTOMATA_MODE"))
        .or(config.general.default_mode)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("AUTOMATA_SERVER_URL"))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Protocol: CLI → env → config → default
    let protocol = cli
        .protocol
        .or_else(|| parse_env(&env, "AUTOMATA_PROTOCOL"))
        .or(config.server.protocol)
        .unwrap_or_default();

    ResolvedConfig {
        mode,
        ordering: config.general.ordering.unwrap_or_default(),
        base_url,
        protocol,
        timeout: config
            .server
            .timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs),
    }
}

fn parse_env<T: ValueEnum>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match T::from_str(&raw, true) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
