mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path, path::PathBuf};
use tracing::debug;

/// Loads configuration from `$CONFIG_PATH` (default `config.yaml`).
///
/// A missing file yields the defaults; a file that exists must parse.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from_path(Path::new(&config_path)).await
}

pub async fn load_from_path(path: &Path) -> Result<Config> {
    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    from_yaml_str(&config_str)
}

pub fn from_yaml_str(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Populates the process environment from an env file.
pub fn load_env_file(path: &str) -> Result<PathBuf> {
    let loaded = dotenvy::from_filename(path)?;
    debug!("Loaded environment from: {}", loaded.display());
    Ok(loaded)
}
