use domain::error::ConfigError;
use domain::settings::Settings;
use dotenvy::dotenv;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.humanloop.com/v2";

pub struct Config {
    pub base_url: String,
    pub settings_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            base_url: env::var("HUMANLOOP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            settings_path: env::var("THOUGHT_PARTNER_SETTINGS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_settings_path()),
        }
    }
}

fn default_settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("thought_partner");
    path.push("settings.json");
    path
}

/// JSON-backed key/value store for [`Settings`].
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: impl ToString) -> ConfigError {
        ConfigError::Settings {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Loads stored settings merged over the defaults. A missing file yields
    /// the defaults.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let data = fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        if data.trim().is_empty() {
            return Ok(Settings::default());
        }
        serde_json::from_str(&data).map_err(|e| self.error(e))
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }
        let serialized = serde_json::to_string_pretty(settings).map_err(|e| self.error(e))?;
        fs::write(&self.path, serialized).map_err(|e| self.error(e))?;
        info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
