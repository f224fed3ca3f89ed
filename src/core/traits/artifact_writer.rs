use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::models::merged_config::MergedConfig;
use crate::core::models::variable_record::VariableRecord;

/// Port for persisting flattened variables and the merged tree.
pub trait ArtifactWriter: Send + Sync {
    /// Write every artifact from the same snapshot.
    ///
    /// Stops at the first failure. Artifacts written before the failure
    /// are left in place.
    fn write(&self, records: &[VariableRecord], merged: &MergedConfig) -> Result<()>;

    /// Paths this writer produces, in write order.
    fn artifact_paths(&self) -> Vec<PathBuf>;
}
