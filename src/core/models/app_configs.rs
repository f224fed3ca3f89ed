use serde_json::{Map, Value};

use crate::core::errors::{PipesError, Result};

/// Resource name → settings for one environment, e.g.
/// `{"elb": {"subnet_purpose": "internal"}, "asg": {"min_size": 1}}`.
///
/// Backed by an insertion-ordered map so that dumps keep the order in
/// which keys were read.
pub type ResourceConfig = Map<String, Value>;

/// Caller-supplied configuration for every environment, keyed by
/// environment name in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfigs {
    envs: Vec<(String, ResourceConfig)>,
}

impl AppConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration for `env`.
    ///
    /// Replacing an existing environment keeps its original position.
    pub fn insert(&mut self, env: impl Into<String>, config: ResourceConfig) {
        let env = env.into();
        match self.envs.iter_mut().find(|(name, _)| *name == env) {
            Some((_, existing)) => *existing = config,
            None => self.envs.push((env, config)),
        }
    }

    /// Returns the configuration for `env`, if present.
    #[cfg(test)]
    pub fn get(&self, env: &str) -> Option<&ResourceConfig> {
        self.envs
            .iter()
            .find(|(name, _)| name == env)
            .map(|(_, config)| config)
    }

    /// Iterates environments in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceConfig)> {
        self.envs
            .iter()
            .map(|(name, config)| (name.as_str(), config))
    }

    #[cfg(test)]
    pub fn env_names(&self) -> Vec<&str> {
        self.envs.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    /// Build from a JSON document of the form `{env: {resource: ...}}`.
    ///
    /// Every environment name is validated and every environment value
    /// must itself be an object.
    pub fn from_json(source_name: &str, value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(PipesError::ParseError {
                source_name: source_name.to_string(),
                detail: "top level must be an object keyed by environment".into(),
            });
        };

        let mut configs = Self::new();
        for (env, config) in root {
            validate_env_name(&env)?;
            let Value::Object(resources) = config else {
                return Err(PipesError::ParseError {
                    source_name: source_name.to_string(),
                    detail: format!("environment '{env}' must map to an object"),
                });
            };
            configs.insert(env, resources);
        }
        Ok(configs)
    }
}

/// Validate an environment name: non-empty, ASCII letters, digits, `-`, `_`.
///
/// Environment names end up in file names and variable names, so
/// anything else is rejected.
pub fn validate_env_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(PipesError::InvalidEnvironment {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_preserves_environment_order() {
        let value = json!({
            "prod": {"asg": {"min_size": 3}},
            "dev": {"asg": {"min_size": 1}},
            "stage": {}
        });
        let configs = AppConfigs::from_json("input", value).unwrap();
        assert_eq!(configs.env_names(), vec!["prod", "dev", "stage"]);
        assert_eq!(configs.get("dev").unwrap()["asg"], json!({"min_size": 1}));
    }

    #[test]
    fn from_json_rejects_non_object_environment() {
        let value = json!({"dev": ["elb"]});
        let err = AppConfigs::from_json("input", value).unwrap_err();
        assert!(matches!(err, PipesError::ParseError { .. }));
        assert!(err.to_string().contains("'dev' must map to an object"));
    }

    #[test]
    fn from_json_rejects_non_object_root() {
        let err = AppConfigs::from_json("input", json!([1, 2])).unwrap_err();
        assert!(matches!(err, PipesError::ParseError { .. }));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut configs = AppConfigs::new();
        configs.insert("dev", ResourceConfig::new());
        configs.insert("prod", ResourceConfig::new());

        let mut replacement = ResourceConfig::new();
        replacement.insert("elb".into(), json!({}));
        configs.insert("dev", replacement);

        assert_eq!(configs.env_names(), vec!["dev", "prod"]);
        assert!(configs.get("dev").unwrap().contains_key("elb"));
    }

    #[test]
    fn env_name_validation() {
        assert!(validate_env_name("dev").is_ok());
        assert!(validate_env_name("prod-us_east1").is_ok());
        assert!(validate_env_name("").is_err());
        assert!(validate_env_name("../etc").is_err());
        assert!(validate_env_name("dev prod").is_err());
    }
}
