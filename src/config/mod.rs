use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "RFACILITY_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_step_minutes")]
    pub opening_hours_step_minutes: u32,
    /// Position used by `--here`; both must be set.
    #[serde(default)]
    pub current_latitude: Option<f64>,
    #[serde(default)]
    pub current_longitude: Option<f64>,
    #[serde(default = "default_distance_decimals")]
    pub distance_decimals: usize,
    #[serde(default = "default_description_lines")]
    pub description_lines: usize,
}

fn default_step_minutes() -> u32 {
    30
}
fn default_distance_decimals() -> usize {
    1
}
fn default_description_lines() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            opening_hours_step_minutes: default_step_minutes(),
            current_latitude: None,
            current_longitude: None,
            distance_decimals: default_distance_decimals(),
            description_lines: default_description_lines(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(CONFIG_DIR_ENV)
            && !custom.is_empty()
        {
            return expand_tilde(&custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfacility")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rfacility")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfacility.conf")
    }

    /// Return the full path of the SQLite catalog
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rfacility.sqlite")
    }

    /// Catalog path as given by `--db` or the config file: `~` is expanded and
    /// relative paths live in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = Self::resolve_db_path(&cfg.database)
            .to_string_lossy()
            .to_string();

        if cfg.current_latitude.is_some() != cfg.current_longitude.is_some() {
            return Err(AppError::Config(
                "current_latitude and current_longitude must be set together".into(),
            ));
        }

        Ok(cfg)
    }

    /// Initialize configuration and catalog files, returning the catalog path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(db_path)
    }
}
