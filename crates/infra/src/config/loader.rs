//! Configuration loader
//!
//! Loads connector configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `RESPONSYS_API_USERNAME`: API account user name (required)
//! - `RESPONSYS_API_PASSWORD`: API account password (required)
//! - `RESPONSYS_ENABLED`: Whether the integration is enabled (default true)
//! - `RESPONSYS_ENDPOINT`: Web service endpoint (https)
//! - `RESPONSYS_TIMEOUT_SECS`: Connect/read timeout in seconds
//!
//! Mapping, object locators and logging keep their defaults when loading
//! from the environment.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./responsys.json` or `./responsys.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use responsys_domain::{ResponsysConfig, ResponsysError, Result};
use url::Url;

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["responsys.json", "responsys.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ResponsysError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A loaded configuration fails validation
pub fn load() -> Result<ResponsysConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ResponsysError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<ResponsysConfig> {
    let username = env_var("RESPONSYS_API_USERNAME")?;
    let password = env_var("RESPONSYS_API_PASSWORD")?;

    let mut config = ResponsysConfig::with_credentials(username, password);
    config.enabled = env_bool("RESPONSYS_ENABLED", true);

    if let Ok(endpoint) = std::env::var("RESPONSYS_ENDPOINT") {
        config.endpoint = endpoint;
    }

    if let Ok(timeout) = std::env::var("RESPONSYS_TIMEOUT_SECS") {
        config.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| ResponsysError::Config(format!("Invalid timeout: {e}")))?;
    }

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ResponsysError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<ResponsysConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ResponsysError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ResponsysError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents =
        std::fs::read_to_string(&config_path).map_err(|e| ResponsysError::from(InfraError::from(e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ResponsysConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| ResponsysError::from(InfraError::from(e))),
        "json" => {
            serde_json::from_str(contents).map_err(|e| ResponsysError::from(InfraError::from(e)))
        }
        _ => Err(ResponsysError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Check a configuration before use.
///
/// Runs [`ResponsysConfig::validate`] and requires an https endpoint.
///
/// # Errors
/// `ResponsysError::Config` naming the offending setting.
pub fn validate(config: &ResponsysConfig) -> Result<()> {
    config.validate()?;

    let endpoint = Url::parse(&config.endpoint).map_err(|e| {
        ResponsysError::Config(format!("Invalid endpoint URL '{}': {e}", config.endpoint))
    })?;
    if endpoint.scheme() != "https" {
        return Err(ResponsysError::Config(format!(
            "Endpoint must use https, got '{}'",
            endpoint.scheme()
        )));
    }

    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent and grandparent, then
/// the same locations relative to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        bases.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            bases.push(exe_dir.to_path_buf());
        }
    }

    bases
        .iter()
        .flat_map(|base| [base.clone(), base.join(".."), base.join("../..")])
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ResponsysError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ResponsysError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
