use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://backend.nurdcells.com/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub page_sizes: PageSizes,
    #[serde(default = "default_config_version")]
    pub config_version: u32,
}

/// Rows per page for each list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizes {
    #[serde(default = "default_users_page_size")]
    pub users: usize,
    #[serde(default = "default_bets_page_size")]
    pub bets: usize,
    #[serde(default = "default_ledger_page_size")]
    pub ledger: usize,
    #[serde(default = "default_history_page_size")]
    pub history: usize,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_config_version() -> u32 {
    2
}

fn default_users_page_size() -> usize {
    12
}

fn default_bets_page_size() -> usize {
    4
}

fn default_ledger_page_size() -> usize {
    5
}

fn default_history_page_size() -> usize {
    10
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            users: default_users_page_size(),
            bets: default_bets_page_size(),
            ledger: default_ledger_page_size(),
            history: default_history_page_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: default_request_timeout_secs(),
            page_sizes: PageSizes::default(),
            config_version: default_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, writing defaults there if it does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)?;

        match toml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                if config.config_version < default_config_version() {
                    config = Self::migrate_config(config)?;
                    config.save_to(path)?;
                }
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config: {}. Using defaults and merging.", e);
                let mut config = Self::default();

                if let Ok(value) = toml::from_str::<toml::Value>(&contents) {
                    if let Some(table) = value.as_table() {
                        if let Some(url) = table.get("api_base_url").and_then(|v| v.as_str()) {
                            config.api_base_url = url.trim_end_matches('/').to_string();
                        }
                        if let Some(level) = table.get("log_level").and_then(|v| v.as_str()) {
                            config.log_level = level.to_string();
                        }
                    }
                }

                config.validate()?;
                config.save_to(path)?;
                Ok(config)
            }
        }
    }

    /// Migrate config from older versions
    fn migrate_config(mut config: Config) -> Result<Self> {
        let current_version = config.config_version;
        let target_version = default_config_version();

        log::info!("Migrating config from v{} to v{}", current_version, target_version);

        if current_version < 2 {
            // v2 joins endpoint paths onto the base, so it must not end in '/'.
            config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
            if config.request_timeout_secs == 0 {
                config.request_timeout_secs = default_request_timeout_secs();
            }
        }

        config.config_version = target_version;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "Invalid api_base_url: '{}'. Must start with http:// or https://",
                self.api_base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }

        let sizes = [
            ("users", self.page_sizes.users),
            ("bets", self.page_sizes.bets),
            ("ledger", self.page_sizes.ledger),
            ("history", self.page_sizes.history),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, size)| *size == 0) {
            return Err(Error::Config(format!(
                "Invalid page_sizes.{}: must be at least 1",
                name
            )));
        }

        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, contents)?;

        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "saffron-admin")
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_sizes.bets, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.log_level, deserialized.log_level);
        assert_eq!(config.page_sizes, deserialized.page_sizes);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api_base_url = "backend.local".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.page_sizes.ledger = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_sizes.ledger"));
    }

    #[test]
    fn test_load_from_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_load_from_migrates_v1() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "api_base_url = \"http://localhost:4000/api/\"\nlog_level = \"debug\"\nconfig_version = 1\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:4000/api");
        assert_eq!(config.config_version, 2);

        let saved: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.config_version, 2);
    }

    #[test]
    fn test_load_from_merges_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"warn\"\npage_sizes = 7\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.page_sizes, PageSizes::default());
    }
}
