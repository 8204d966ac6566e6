use crate::tui::logic::Column;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "usertable";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_nationality")]
    pub nationality: String,
    #[serde(default = "default_results")]
    pub results: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "https://randomuser.me/api/".to_string()
}

fn default_nationality() -> String {
    "us".to_string()
}

fn default_results() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            nationality: default_nationality(),
            results: default_results(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_session")]
    pub session: String,
}

fn default_true() -> bool {
    true
}

fn default_session() -> String {
    "default".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            session: default_session(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub disabled_columns: Vec<Column>,
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            disabled_columns: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn cache_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Updates one dotted key such as `source.results`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "source.url" => self.source.url = value.to_string(),
            "source.nationality" => self.source.nationality = value.to_string(),
            "source.results" => self.source.results = value.parse()?,
            "source.timeout_secs" => self.source.timeout_secs = value.parse()?,
            "cache.enabled" => self.cache.enabled = value.parse()?,
            "cache.session" => self.cache.session = value.to_string(),
            "ui.date_format" => self.ui.date_format = value.to_string(),
            "log.level" => self.log.level = value.to_string(),
            _ => bail!(
                "unknown key: {} (available: {})",
                key,
                Self::KEYS.join(", ")
            ),
        }
        Ok(())
    }

    pub const KEYS: [&'static str; 8] = [
        "source.url",
        "source.nationality",
        "source.results",
        "source.timeout_secs",
        "cache.enabled",
        "cache.session",
        "ui.date_format",
        "log.level",
    ];

    pub fn set_column_disabled(&mut self, column: Column, disabled: bool) {
        self.ui.disabled_columns.retain(|c| *c != column);
        if disabled {
            self.ui.disabled_columns.push(column);
        }
    }
}
