use crate::errors::{AppError, AppResult};
use crate::models::settings::SettingsState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub settings: SettingsState,
    /// `--db` from the command line; never written back to the file.
    #[serde(skip)]
    pub database_override: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            settings: SettingsState::default(),
            database_override: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.worktime`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worktime")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktime.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worktime.sqlite")
    }

    /// Database actually in use: the `--db` override, else the configured one.
    pub fn database_path(&self) -> &str {
        self.database_override.as_deref().unwrap_or(&self.database)
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)
            .map_err(|e| AppError::Config(format!("cannot write {}: {e}", path.display())))?;
        Ok(())
    }
}
