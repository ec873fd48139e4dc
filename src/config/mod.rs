use crate::errors::{AppError, AppResult};
use crate::store::StorageLocator;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage locator: `memory`, `file:PATH` or `sqlite:PATH`.
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// chrono format for ledger timestamps (local time zone).
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// tracing filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage() -> String {
    "memory".to_string()
}
fn default_admin_password() -> String {
    "admin".to_string()
}
fn default_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            admin_password: default_admin_password(),
            time_format: default_time_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.checkgate`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".checkgate")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("checkgate.conf")
    }

    /// Return the default SQLite database path written by `init`
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("checkgate.sqlite")
    }

    /// Load configuration from the standard location; defaults (in-memory
    /// storage) when no file exists.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Reject settings that would only fail later, in the middle of a
    /// command (a bad `time_format` surfaces after a check-in is stored).
    pub fn validate(&self) -> AppResult<()> {
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid time_format '{}'",
                self.time_format
            )));
        }
        Ok(())
    }

    /// Parsed storage locator.
    pub fn locator(&self) -> AppResult<StorageLocator> {
        self.storage.parse()
    }

    /// Configuration written by `init`: persistent SQLite storage, either
    /// at the given path (relative names land in the config dir) or the
    /// default database file.
    pub fn for_init(custom_store: Option<&str>) -> AppResult<Self> {
        let storage = match custom_store {
            Some(raw) => {
                let locator: StorageLocator = raw.parse()?;
                match locator {
                    StorageLocator::Sqlite(p) if p.is_relative() => {
                        StorageLocator::Sqlite(Self::config_dir().join(p))
                    }
                    StorageLocator::File(p) if p.is_relative() => {
                        StorageLocator::File(Self::config_dir().join(p))
                    }
                    other => other,
                }
            }
            None => StorageLocator::Sqlite(Self::database_file()),
        };

        Ok(Config {
            storage: storage.to_string(),
            ..Config::default()
        })
    }
}
