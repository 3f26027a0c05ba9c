use std::{fs, path::Path, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::api::webhook::{DEFAULT_TIMEOUT, DEFAULT_WEBHOOK_URL};

const APP_DIR_NAME: &str = ".labflow";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const WEBHOOK_URL_ENV: &str = "LABFLOW_WEBHOOK_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Automation webhook that answers chat turns
    pub webhook_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Name used to log in without prompting
    pub user_name: Option<String>,
    pub assistant_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_name: None,
            assistant_name: "Flo".to_string(),
        }
    }
}

impl Settings {
    /// Settings as stored on disk, defaults when the file is absent.
    pub fn load_from_file(explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(explicit)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let value: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config TOML at {}", path.display()))?;
        Ok(value)
    }

    /// Stored settings with the environment override applied.
    pub fn load_with(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = Self::load_from_file(explicit)?;
        if let Ok(url) = std::env::var(WEBHOOK_URL_ENV) {
            if !url.trim().is_empty() {
                settings.webhook_url = url.trim().to_string();
            }
        }
        Ok(settings)
    }

    pub fn save_with(&self, explicit: Option<&Path>) -> Result<()> {
        let path = resolve_config_path(explicit)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create config directory at {}", dir.display())
                })?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn init(force: bool, explicit: Option<&Path>) -> Result<PathBuf> {
        let path = resolve_config_path(explicit)?;
        if path.exists() && !force {
            anyhow::bail!("Config already exists at {} (use --force to overwrite)", path.display());
        }
        Self::default().save_with(Some(&path))?;
        Ok(path)
    }

    /// Updates one field from its `config set` key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "webhook-url" | "webhook_url" => self.webhook_url = value.trim().to_string(),
            "timeout" | "timeout-secs" | "timeout_secs" => {
                self.timeout_secs = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Timeout must be a whole number of seconds, got {value:?}"))?;
            }
            "user" | "user-name" | "user_name" => {
                let name = value.trim();
                self.user_name = (!name.is_empty()).then(|| name.to_string());
            }
            "assistant-name" | "assistant_name" => self.assistant_name = value.trim().to_string(),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

fn config_dir_path() -> Result<PathBuf> {
    let home = home_dir().context("Cannot resolve home directory")?;
    Ok(home.join(APP_DIR_NAME))
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit { return Ok(p.to_path_buf()); }
    Ok(config_dir_path()?.join(CONFIG_FILE_NAME))
}
