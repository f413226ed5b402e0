use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_NAME: &str = "hookping.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Destination used when no URL is given on the command line.
    pub webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from an explicit path, or search upward from current dir,
    /// then the user config dir. Only an explicit path is allowed to fail; a missing
    /// or broken implicit config yields defaults.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path_override {
            return Self::from_file(&path);
        }
        let Some(path) = find_upwards(DEFAULT_CONFIG_NAME).or_else(user_config_file) else {
            log::debug!("No {DEFAULT_CONFIG_NAME} found, using defaults");
            return Ok(Config::default());
        };
        match Self::from_file(&path) {
            Ok(cfg) => Ok(cfg),
            Err(err) => {
                log::warn!("Ignoring {}: {err:#}", path.display());
                Ok(Config::default())
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Reading config file {}", path.display()))?;
        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Parsing TOML config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(cfg)
    }
}

fn find_upwards(file_name: &str) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn user_config_file() -> Option<PathBuf> {
    let candidate = dirs::config_dir()?.join("hookping").join(DEFAULT_CONFIG_NAME);
    candidate.is_file().then_some(candidate)
}
