//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the idea API location, theme, log level and toast timing.

mod error;

pub use error::ConfigError;

use crate::api::DEFAULT_BASE_URL;
use crate::error::AppResult;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/swj-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub theme_name: String,
    pub log_level: String,
    pub toast_duration_secs: u64,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_toast_duration_secs() -> u64 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            toast_duration_secs: default_toast_duration_secs(),
            file_path: None,
        }
    }

    /// Load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// default values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::ReadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::Malformed(e.to_string()))?;
            self.base_url = data.base_url;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
            self.toast_duration_secs = data.toast_duration_secs;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            toast_duration_secs: self.toast_duration_secs,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::Encode(e.to_string()))?;

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the parsed log level filter.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns how long a toast stays on screen.
    ///
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs.max(1))
    }

    /// Returns the path of the configuration file once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "swj-tui-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn load_creates_default_file() {
        let dir = scratch_dir("create");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        let contents = fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains(DEFAULT_BASE_URL));
        assert!(contents.contains("tokyo-night"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reads_existing_file_and_defaults_missing_keys() {
        let dir = scratch_dir("read");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "base_url: http://localhost:4000\nlog_level: debug\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.toast_duration(), Duration::from_secs(4));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "toast_duration_secs: [not, a, number]\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::Malformed(_)))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn invalid_log_level() {
        let config = Config {
            log_level: "shouty".to_string(),
            ..Config::new()
        };
        assert!(matches!(
            config.log_level_filter(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
