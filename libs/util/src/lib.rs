use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

pub const CONFIG_ENV: &str = "POPUP_CONFIG";
pub const DEFAULT_CONFIG: &str = "Config.toml";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub cors: Cors,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cors {
    pub origins: Vec<String>,
}

impl Default for Cors {
    fn default() -> Self {
        Self {
            origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// `$POPUP_CONFIG` when set, `Config.toml` otherwise.
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG))
}

/// Reads a TOML config. A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(
            task = "load config",
            path = %path.display(),
            "config file not found, using defaults"
        );
        return Ok(Config::default());
    }

    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = toml::from_str::<Config>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    info!(task = "load config", path = %path.display());

    Ok(config)
}
