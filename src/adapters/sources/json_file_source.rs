use std::path::PathBuf;

use serde_json::Value;

use crate::core::errors::{PipesError, Result};
use crate::core::models::app_configs::AppConfigs;
use crate::core::traits::config_source::AppConfigSource;

/// Reads every environment from one JSON document:
/// `{"dev": {"elb": {...}}, "prod": {...}}`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AppConfigSource for JsonFileSource {
    fn load(&self) -> Result<AppConfigs> {
        if !self.path.is_file() {
            return Err(PipesError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let source_name = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| PipesError::ParseError {
            source_name: source_name.clone(),
            detail: e.to_string(),
        })?;

        AppConfigs::from_json(&source_name, value)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
