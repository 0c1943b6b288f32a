//! Handles settings for the application.
//!
//! Values are read, in increasing priority, from the optional TOML file
//! (`expense_tracker.toml` unless `--config` says otherwise), from
//! `EXPENSE_TRACKER_*` environment variables and from command-line flags.
use config::{Config, Environment, File, Map};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CONFIG_PATH: &str = "expense_tracker.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// JSON file holding every expense.
    pub data_file: String,
    /// Target of `export` when `--file` is not given.
    pub export_file: String,
    /// Log level for the `tracing` subscriber.
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: engine::DEFAULT_DATA_FILE.to_string(),
            export_file: engine::DEFAULT_EXPORT_FILE.to_string(),
            level: "warn".to_string(),
        }
    }
}

const ENV_PREFIX: &str = "EXPENSE_TRACKER";

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self> {
        Self::load(config_path, None)
    }

    /// Like [`Settings::new`], reading the environment from `env` instead of
    /// the process when given.
    pub fn load(config_path: Option<&str>, env: Option<Map<String, String>>) -> Result<Self> {
        let path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        let settings = Config::builder()
            .add_source(File::with_name(path).required(config_path.is_some()))
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Applies the `--data-file` override.
    #[must_use]
    pub fn with_data_file(mut self, data_file: Option<String>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        self
    }
}
