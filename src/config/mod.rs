use crate::errors::{AppError, AppResult};
use crate::utils::date::validate_format;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hour of day after which a class counts as "late".
    #[serde(default = "default_limit_hour")]
    pub limit_hour: u32,
    /// chrono format used when printing timestamps.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    #[serde(default = "default_colors")]
    pub colors: bool,
}

fn default_limit_hour() -> u32 {
    18
}
fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
fn default_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit_hour: default_limit_hour(),
            datetime_format: default_datetime_format(),
            colors: default_colors(),
        }
    }
}

impl Config {
    /// Platform configuration directory, `$HOME/.schedstats` as fallback.
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("schedstats"),
            None => {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".schedstats")
            }
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("schedstats.conf")
    }

    /// Load from the default location.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load from `path`, or return defaults if the file is missing or empty.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), ?cfg, "configuration loaded");
        Ok(cfg)
    }

    /// Values serde cannot check on its own.
    pub fn validate(&self) -> AppResult<()> {
        validate_format(&self.datetime_format)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
