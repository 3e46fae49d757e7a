//! Configuration management for spendlog.
//!
//! Settings live in `config.json` inside the platform data directory resolved
//! by [`DataStorage`]. A missing file is not an error: every field has a
//! default, so the application runs without any setup.
//!
//! ## Structure
//!
//! - **Storage**: where the database and the legacy import file live
//! - **Display**: default limits used by the command-line views
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spendlog::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.storage.db_path();
//! println!("{}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name.
pub const DB_FILE_NAME: &str = "app.db";

/// Default name of the legacy JSON expense list picked up by the importer.
pub const LEGACY_FILE_NAME: &str = "expenses.json";

/// Location of the on-disk store and the legacy import source.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Database file name, relative to the data directory.
    pub db_file: String,

    /// Legacy JSON file name, relative to the data directory.
    pub legacy_file: String,
}

/// Defaults for the command-line views.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of rows shown by `list` without `--all`.
    pub recent_limit: usize,

    /// Number of calendar days shown by `summary`.
    pub summary_days: usize,

    /// Page size of the course listing.
    pub courses_per_page: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            data_dir: None,
            db_file: DB_FILE_NAME.to_string(),
            legacy_file: LEGACY_FILE_NAME.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            recent_limit: 5,
            summary_days: 30,
            courses_per_page: 10,
        }
    }
}

impl StorageConfig {
    /// Storage rooted at an explicit directory, with default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        StorageConfig {
            data_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Directory holding the database and the legacy file. Not created here.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => DataStorage::new().base_path().to_path_buf(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir().join(&self.db_file)
    }

    pub fn legacy_path(&self) -> PathBuf {
        self.data_dir().join(&self.legacy_file)
    }
}

impl Config {
    /// Loads `config.json`, falling back to defaults when the file is absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}
