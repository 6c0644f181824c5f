//! Configuration loader
//!
//! Builds the application [`Config`] from an optional file plus environment
//! variables.
//!
//! ## Loading Strategy
//! 1. Load `.env` from the working directory (missing file is fine)
//! 2. Read the file named by `ZIGGY_CONFIG`, or the first file found by
//!    [`probe_config_paths`], or start from defaults
//! 3. Apply environment variable overrides on top
//! 4. Validate the result
//!
//! ## Environment Variables
//! - `ZIGGY_CONFIG`: Explicit config file path (`.toml` or `.json`)
//! - `ZIGGY_HOST`: Listen address
//! - `ZIGGY_PORT`: Listen port
//! - `ZIGGY_ENV`: `development`, `production` or `test`
//! - `ZIGGY_EVENT_SLUG`: The event this deployment serves
//! - `ZIGGY_RUN_EVENTS_API_KEY`: run.events API key
//! - `ZIGGY_RUN_EVENTS_BASE_URL`: run.events API base URL
//! - `ZIGGY_UPSTREAM_TIMEOUT_SECS`: Upstream request timeout in seconds
//! - `ZIGGY_CACHE_TTL_SECS`: Aggregator cache TTL in seconds
//! - `ZIGGY_LOG_LEVEL`: Fallback log filter when `RUST_LOG` is unset
//!
//! ## File Locations
//! Without `ZIGGY_CONFIG` the loader probes, in order, `ziggy.toml`,
//! `ziggy.json` and `config.toml` in the working directory, then next to the
//! executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ziggy_domain::{Config, Environment, Result, ZiggyError};

use crate::errors::InfraError;

pub const CONFIG_PATH_VAR: &str = "ZIGGY_CONFIG";

const CONFIG_FILE_NAMES: [&str; 3] = ["ziggy.toml", "ziggy.json", "config.toml"];

/// Load configuration with the full strategy described in the module docs
///
/// # Errors
/// Returns `ZiggyError::Config` if:
/// - `ZIGGY_CONFIG` names a file that does not exist
/// - A config file cannot be parsed
/// - An environment variable has an invalid value
/// - The merged configuration fails validation
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    let explicit = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);
    let mut config = match explicit.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::info!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;

    if config.event.api_key.trim().is_empty() {
        tracing::warn!("ZIGGY_RUN_EVENTS_API_KEY is not set; upstream calls will be rejected");
    }
    Ok(config)
}

/// Load configuration from defaults and environment variables only
///
/// # Errors
/// Returns `ZiggyError::Config` if a variable has an invalid value or the
/// result fails validation.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Fields missing from
/// the file keep their defaults. The result is not validated.
///
/// # Errors
/// Returns `ZiggyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ZiggyError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ZiggyError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ZiggyError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ZiggyError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ZiggyError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    probe_dirs(&dirs)
}

fn probe_dirs(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Overlay `ZIGGY_*` variables onto `config`
///
/// `lookup` resolves a variable name to its value; empty values are treated
/// as unset.
///
/// # Errors
/// Returns `ZiggyError::Config` naming the variable if a numeric or
/// environment value does not parse.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(host) = var("ZIGGY_HOST") {
        config.server.host = host;
    }
    if let Some(port) = var("ZIGGY_PORT") {
        config.server.port = parse_var("ZIGGY_PORT", &port)?;
    }
    if let Some(env) = var("ZIGGY_ENV") {
        config.server.environment = parse_var::<Environment>("ZIGGY_ENV", &env)?;
    }
    if let Some(slug) = var("ZIGGY_EVENT_SLUG") {
        config.event.slug = slug;
    }
    if let Some(api_key) = var("ZIGGY_RUN_EVENTS_API_KEY") {
        config.event.api_key = api_key;
    }
    if let Some(base_url) = var("ZIGGY_RUN_EVENTS_BASE_URL") {
        config.upstream.base_url = base_url;
    }
    if let Some(timeout) = var("ZIGGY_UPSTREAM_TIMEOUT_SECS") {
        config.upstream.timeout_secs = parse_var("ZIGGY_UPSTREAM_TIMEOUT_SECS", &timeout)?;
    }
    if let Some(ttl) = var("ZIGGY_CACHE_TTL_SECS") {
        config.cache.ttl_secs = parse_var("ZIGGY_CACHE_TTL_SECS", &ttl)?;
    }
    if let Some(level) = var("ZIGGY_LOG_LEVEL") {
        config.log_level = level;
    }
    Ok(())
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ZiggyError::Config(format!("Invalid {key}: {e}")))
}
