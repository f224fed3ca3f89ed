use crate::core::errors::Result;
use crate::core::models::app_configs::AppConfigs;

/// Port for loading per-environment application overrides.
pub trait AppConfigSource {
    fn load(&self) -> Result<AppConfigs>;

    /// Human-readable origin, used in progress output.
    fn describe(&self) -> String;
}
