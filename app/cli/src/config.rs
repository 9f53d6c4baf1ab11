//! FILENAME: app/cli/src/config.rs
// PURPOSE: Front-end configuration, read from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smartcalc_parser::{EvalOptions, DEFAULT_MAX_DEPTH, MAX_CONFIGURABLE_DEPTH};

use crate::error::AppError;

/// Settings for one calculator run. Every field has a default, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Nesting limit handed to the evaluator.
    pub max_depth: usize,
    /// Start with the scientific functions enabled.
    pub scientific: bool,
    /// Append log lines here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            scientific: false,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load a config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)?;
        let config: AppConfig =
            serde_json::from_str(&text).map_err(|source| AppError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_depth == 0 {
            return Err(AppError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.max_depth > MAX_CONFIGURABLE_DEPTH {
            return Err(AppError::InvalidConfig(format!(
                "max_depth must be at most {}, got {}",
                MAX_CONFIGURABLE_DEPTH, self.max_depth
            )));
        }
        Ok(())
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            max_depth: self.max_depth,
        }
    }
}
