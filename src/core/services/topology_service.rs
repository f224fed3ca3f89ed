use crate::core::models::subnet::{AvailabilityZones, Subnet, SubnetTarget};
use crate::core::traits::diagnostics::DiagnosticSink;

/// Groups availability zones by account and region.
pub struct TopologyService<'a> {
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> TopologyService<'a> {
    pub fn new(diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { diagnostics }
    }

    /// Collect the unique zones of every subnet tagged with `target`.
    ///
    /// Zones keep the order in which they were first seen.
    pub fn collect_zones(&self, subnets: &[Subnet], target: SubnetTarget) -> AvailabilityZones {
        let mut zones = AvailabilityZones::default();

        for subnet in subnets {
            if subnet.target.as_deref() != Some(target.as_str()) {
                continue;
            }
            self.diagnostics.debug(&format!(
                "Subnet {}/{} in {}",
                subnet.account, subnet.region, subnet.availability_zone
            ));

            let region = zones
                .0
                .entry(subnet.account.clone())
                .or_default()
                .entry(subnet.region.clone())
                .or_default();
            if !region.contains(&subnet.availability_zone) {
                region.push(subnet.availability_zone.clone());
            }
        }

        zones
    }
}
