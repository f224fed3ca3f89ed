use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{PipesError, Result};
use crate::core::models::app_configs::validate_env_name;

/// Default environments processed from a runway directory.
pub const DEFAULT_ENVS: &[&str] = &["dev", "stage", "prod"];

/// Default base path for the variable artifacts.
pub const DEFAULT_OUT_FILE: &str = "./raw.properties";

/// Default Gate API endpoint.
pub const DEFAULT_GATE_URL: &str = "http://gate-api.build.example.com:8084";

/// Directory holding the project-level config file.
pub const CONFIG_DIR: &str = ".pipes";

/// Top-level configuration read from `.pipes/config.toml`.
///
/// Every field is optional; command-line flags override file values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub pipes: PipesSection,
    #[serde(default)]
    pub templates: TemplatesSection,
}

impl AppConfig {
    /// Load configuration from the first location that exists:
    ///
    /// 1. `explicit` (must exist when given)
    /// 2. `./.pipes/config.toml`
    /// 3. `~/.pipes/config.toml`
    ///
    /// Falls back to defaults when no file is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(PipesError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::load_file(path);
        }

        match Self::discover() {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Candidate config files in priority order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![Path::new(CONFIG_DIR).join("config.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_DIR).join("config.toml"));
        }
        paths
    }

    fn discover() -> Option<PathBuf> {
        Self::search_paths().into_iter().find(|p| p.is_file())
    }

    /// Parse and validate a config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| PipesError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        if let Some(envs) = &config.pipes.envs {
            for env in envs {
                validate_env_name(env)?;
            }
        }

        Ok(config)
    }

    /// Configured environments, or `dev`, `stage`, `prod`.
    pub fn envs(&self) -> Vec<String> {
        self.pipes
            .envs
            .clone()
            .unwrap_or_else(|| DEFAULT_ENVS.iter().map(|s| s.to_string()).collect())
    }

    pub fn out_file(&self) -> PathBuf {
        self.pipes
            .out_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE))
    }

    pub fn gate_url(&self) -> String {
        self.pipes
            .gate_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GATE_URL.to_string())
    }
}

/// The `[pipes]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipesSection {
    pub envs: Option<Vec<String>>,
    /// Directory of templates; the built-in template is used when unset.
    pub templates_dir: Option<PathBuf>,
    pub out_file: Option<PathBuf>,
    pub gate_url: Option<String>,
}

/// The `[templates]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesSection {
    /// Template rendering the default resource settings.
    pub configs: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::default();
        assert_eq!(config.envs(), vec!["dev", "stage", "prod"]);
        assert_eq!(config.out_file(), PathBuf::from("./raw.properties"));
        assert_eq!(config.gate_url(), DEFAULT_GATE_URL);
        assert!(config.pipes.templates_dir.is_none());
        assert!(config.templates.configs.is_none());
    }

    #[test]
    fn loads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[pipes]
envs = ["dev", "prod"]
templates_dir = "templates"
out_file = "build/vars.properties"
gate_url = "http://gate.internal:8084"

[templates]
configs = "defaults.json.j2"
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();

        assert_eq!(config.envs(), vec!["dev", "prod"]);
        assert_eq!(config.pipes.templates_dir, Some(PathBuf::from("templates")));
        assert_eq!(config.out_file(), PathBuf::from("build/vars.properties"));
        assert_eq!(config.gate_url(), "http://gate.internal:8084");
        assert_eq!(config.templates.configs.as_deref(), Some("defaults.json.j2"));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
        assert!(matches!(err, PipesError::FileNotFound { .. }));
    }

    #[test]
    fn invalid_env_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pipes]\nenvs = [\"dev\", \"../prod\"]\n").unwrap();

        let err = AppConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, PipesError::InvalidEnvironment { .. }));
    }

    #[test]
    fn unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pipes]\nenviroments = [\"dev\"]\n").unwrap();

        let err = AppConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, PipesError::InvalidConfig { .. }));
    }
}
