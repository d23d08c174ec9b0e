use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "keytrust";
const CONFIG_FILE_NAME: &str = "config.json";
const DEVELOPER_KEYS_SUBDIR: &str = ".rsapsstool/keypairs";
pub const DEFAULT_TRUSTED_KEYS_PATH: &str = "/var/horizon/userkeys";
pub const DEFAULT_API_URL: &str = "http://localhost:8510";

pub const DEVELOPER_KEYS_ENV: &str = "KEYTRUST_DEVELOPER_KEYS";
pub const TRUSTED_KEYS_ENV: &str = "KEYTRUST_TRUSTED_KEYS";
pub const API_URL_ENV: &str = "KEYTRUST_API_URL";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_keys_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_keys_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// The two key directories one `list` run reads, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub developer: PathBuf,
    pub trusted: PathBuf,
}

pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, AppError> {
        Self::load_from(Self::get_config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn load_from(config_path: PathBuf) -> Result<Self, AppError> {
        let mut manager = Self {
            config: AppConfig::default(),
            config_path,
        };
        manager.load()?;
        Ok(manager)
    }

    fn get_config_dir() -> Result<PathBuf, AppError> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| AppError::Config("Could not determine config directory.".into()))
    }

    pub fn get_default_developer_keys_path() -> Result<PathBuf, AppError> {
        dirs::home_dir()
            .map(|home| home.join(DEVELOPER_KEYS_SUBDIR))
            .ok_or_else(|| AppError::Config("Could not determine the current user's home directory.".into()))
    }

    fn load(&mut self) -> Result<(), AppError> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path).map_err(|e| AppError::Io {
                path: self.config_path.clone(),
                source: e,
            })?;
            if !content.trim().is_empty() {
                self.config = serde_json::from_str(&content)?;
            }
        }
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        let config_dir = self.config_path.parent().ok_or_else(|| {
            AppError::Config("Invalid configuration file path.".to_string())
        })?;
        fs::create_dir_all(config_dir).map_err(|e| AppError::Io {
            path: config_dir.to_path_buf(),
            source: e,
        })?;
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, content).map_err(|e| AppError::Io {
            path: self.config_path.clone(),
            source: e,
        })
    }

    pub fn get_developer_keys_path(&self) -> Result<PathBuf, AppError> {
        match env_path(DEVELOPER_KEYS_ENV).or_else(|| self.config.developer_keys_path.clone()) {
            Some(path) => Ok(path),
            None => Self::get_default_developer_keys_path(),
        }
    }

    pub fn get_trusted_keys_path(&self) -> PathBuf {
        env_path(TRUSTED_KEYS_ENV)
            .or_else(|| self.config.trusted_keys_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRUSTED_KEYS_PATH))
    }

    pub fn get_api_url(&self) -> String {
        env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.config.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Resolves both store directories. Explicit overrides (command-line
    /// flags) win over the environment, the config file and the defaults.
    pub fn store_paths(
        &self,
        developer_override: Option<PathBuf>,
        trusted_override: Option<PathBuf>,
    ) -> Result<StorePaths, AppError> {
        let developer = match developer_override {
            Some(path) => path,
            None => self.get_developer_keys_path()?,
        };
        let trusted = trusted_override.unwrap_or_else(|| self.get_trusted_keys_path());
        Ok(StorePaths { developer, trusted })
    }

    pub fn set_developer_keys_path(&mut self, path: PathBuf) {
        self.config.developer_keys_path = Some(path);
    }

    pub fn set_trusted_keys_path(&mut self, path: PathBuf) {
        self.config.trusted_keys_path = Some(path);
    }

    pub fn set_api_url(&mut self, url: String) {
        self.config.api_url = Some(url);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
