use std::path::Path;

use crate::adapters::diagnostics::tracing_sink::TracingSink;
use crate::adapters::gate::gate_subnet_source::GateSubnetSource;
use crate::adapters::gate::sample_subnet_source::SampleSubnetSource;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{PipesError, Result};
use crate::core::models::subnet::SubnetTarget;
use crate::core::services::topology_service::TopologyService;
use crate::core::traits::subnet_source::SubnetSource;

/// Execute `pipes subnets`.
///
/// Prints `{account: {region: [zone, ...]}}` as pretty JSON on stdout.
pub fn execute(
    target: SubnetTarget,
    sample: Option<&Path>,
    gate_url: Option<&str>,
    config: &AppConfig,
) -> Result<()> {
    let sink = TracingSink::new("subnets");

    let source: Box<dyn SubnetSource> = match sample {
        Some(path) => Box::new(SampleSubnetSource::new(path)),
        None => {
            let url = gate_url.map(String::from).unwrap_or_else(|| config.gate_url());
            Box::new(GateSubnetSource::new(url))
        }
    };

    let subnets = source.fetch()?;
    let zones = TopologyService::new(&sink).collect_zones(&subnets, target);

    if zones.is_empty() {
        output::warning(&format!("No {target} subnets found"));
    }

    let json = serde_json::to_string_pretty(&zones).map_err(|e| PipesError::EncodeError {
        detail: e.to_string(),
    })?;
    println!("{json}");

    Ok(())
}
