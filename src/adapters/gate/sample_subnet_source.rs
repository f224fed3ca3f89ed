use std::path::PathBuf;

use crate::core::errors::{PipesError, Result};
use crate::core::models::subnet::Subnet;
use crate::core::traits::subnet_source::SubnetSource;

/// Reads a saved `/subnets/aws` response from disk.
pub struct SampleSubnetSource {
    path: PathBuf,
}

impl SampleSubnetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SubnetSource for SampleSubnetSource {
    fn fetch(&self) -> Result<Vec<Subnet>> {
        if !self.path.is_file() {
            return Err(PipesError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| PipesError::ParseError {
            source_name: self.path.display().to_string(),
            detail: e.to_string(),
        })
    }
}
