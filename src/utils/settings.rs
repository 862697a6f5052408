use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::constants::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL, ENV_PREFIX};

/// Runtime settings. Sources in increasing precedence: defaults, the TOML
/// config file, then `CROP_ADVISOR_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub model_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            model_path: None,
        }
    }
}

impl Settings {
    /// Load settings; a missing config file is not an error
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let settings = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn with_model_path(mut self, model_path: Option<PathBuf>) -> Self {
        if model_path.is_some() {
            self.model_path = model_path;
        }
        self
    }
}
