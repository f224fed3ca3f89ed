use serde::ser::{Serialize, SerializeMap, Serializer};

use super::app_configs::ResourceConfig;

/// Merged configuration for a single environment.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub name: String,
    pub resources: ResourceConfig,
}

/// Overrides layered on rendered defaults for every environment.
///
/// Environments keep the order of the caller's input. Built once per
/// run and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedConfig {
    pub environments: Vec<EnvironmentConfig>,
}

impl MergedConfig {
    /// Returns the merged resources for `env`, if present.
    #[cfg(test)]
    pub fn get(&self, env: &str) -> Option<&ResourceConfig> {
        self.environments
            .iter()
            .find(|e| e.name == env)
            .map(|e| &e.resources)
    }

    pub fn env_names(&self) -> Vec<&str> {
        self.environments.iter().map(|e| e.name.as_str()).collect()
    }
}

/// Serializes as `{env: {resource: value}}` in environment order.
impl Serialize for MergedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.environments.len()))?;
        for env in &self.environments {
            map.serialize_entry(&env.name, &env.resources)?;
        }
        map.end()
    }
}
