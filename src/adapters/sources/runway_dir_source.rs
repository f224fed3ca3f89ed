use std::path::PathBuf;

use serde_json::Value;

use crate::core::errors::{PipesError, Result};
use crate::core::models::app_configs::{AppConfigs, ResourceConfig, validate_env_name};
use crate::core::traits::config_source::AppConfigSource;
use crate::core::traits::diagnostics::DiagnosticSink;

/// Reads `application-master-{env}.json` for each environment from a
/// runway directory checked into the application repository.
///
/// An environment without a file gets an empty configuration, so the
/// rendered defaults apply unchanged.
pub struct RunwayDirSource<'a> {
    dir: PathBuf,
    envs: Vec<String>,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> RunwayDirSource<'a> {
    pub fn new(
        dir: impl Into<PathBuf>,
        envs: Vec<String>,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            dir: dir.into(),
            envs,
            diagnostics,
        }
    }

    pub fn file_name(env: &str) -> String {
        format!("application-master-{env}.json")
    }

    fn load_env(&self, env: &str) -> Result<ResourceConfig> {
        let path = self.dir.join(Self::file_name(env));
        if !path.is_file() {
            self.diagnostics.warn(&format!(
                "{} not found, using template defaults for {env}",
                path.display()
            ));
            return Ok(ResourceConfig::new());
        }

        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| PipesError::ParseError {
            source_name: source_name.clone(),
            detail: e.to_string(),
        })?;

        match value {
            Value::Object(resources) => {
                self.diagnostics
                    .debug(&format!("Loaded {} resource(s) from {source_name}", resources.len()));
                Ok(resources)
            }
            _ => Err(PipesError::ParseError {
                source_name,
                detail: "expected a JSON object".into(),
            }),
        }
    }
}

impl AppConfigSource for RunwayDirSource<'_> {
    fn load(&self) -> Result<AppConfigs> {
        if !self.dir.is_dir() {
            return Err(PipesError::FileNotFound {
                path: self.dir.clone(),
            });
        }

        let mut configs = AppConfigs::new();
        for env in &self.envs {
            validate_env_name(env)?;
            configs.insert(env.clone(), self.load_env(env)?);
        }
        Ok(configs)
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.dir.display(), self.envs.join(", "))
    }
}
