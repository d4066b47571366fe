//! Configuration for the catalog connection.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (ARTFINDER_BASE_URL, ARTFINDER_RELAY_URL,
//!    ARTFINDER_LIMIT, ARTFINDER_TIMEOUT)
//! 2. Project config file (.artfinder/config.yaml in the current directory or a parent)
//! 3. User config file (<config dir>/artfinder/config.yaml)
//! 4. Defaults (public iTunes endpoint, 60 results, 30s timeout)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::CatalogSettings;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    /// Same-origin relay that forwards catalog requests
    pub relay_url: Option<String>,
    pub limit: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog: CatalogSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find the project config file by searching the current directory and parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".artfinder").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// User-level config file, if present
fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("artfinder").join("config.yaml");
    path.exists().then_some(path)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Read an environment override, failing on unparsable values
fn env_override<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid {}={}: {}", key, value, e)),
        Err(_) => Ok(None),
    }
}

/// Merge file settings over defaults, then environment over both
fn resolve(file: Option<&ConfigFile>) -> Result<CatalogSettings> {
    let defaults = CatalogSettings::default();
    let catalog = file.map(|f| f.catalog.clone()).unwrap_or_default();

    let base_url = env_override::<String>("ARTFINDER_BASE_URL")?
        .or(catalog.base_url)
        .unwrap_or(defaults.base_url);

    let relay_url = env_override::<String>("ARTFINDER_RELAY_URL")?
        .or(catalog.relay_url)
        .filter(|url| !url.trim().is_empty());

    let limit = env_override("ARTFINDER_LIMIT")?
        .or(catalog.limit)
        .unwrap_or(defaults.limit);

    let timeout_seconds = env_override("ARTFINDER_TIMEOUT")?
        .or(catalog.timeout_seconds)
        .unwrap_or(defaults.timeout_seconds);

    Ok(CatalogSettings {
        base_url,
        relay_url,
        limit,
        timeout_seconds,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config_file = find_config_file(&cwd).or_else(user_config_file);

    let file = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    Ok(ResolvedConfig {
        catalog: resolve(file.as_ref())?,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
