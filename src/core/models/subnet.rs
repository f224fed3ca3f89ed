use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A subnet as reported by Gate's `/subnets/aws` endpoint.
///
/// Only the fields needed for zone discovery are kept; everything else
/// in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subnet {
    pub account: String,
    pub region: String,
    #[serde(rename = "availabilityZone")]
    pub availability_zone: String,
    /// Purpose tag, `ec2` or `elb`. Absent for untagged subnets.
    #[serde(default)]
    pub target: Option<String>,
}

/// Which kind of subnet to collect zones for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SubnetTarget {
    #[default]
    Ec2,
    Elb,
}

impl SubnetTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubnetTarget::Ec2 => "ec2",
            SubnetTarget::Elb => "elb",
        }
    }
}

impl fmt::Display for SubnetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `account → region → [availability zone]`.
///
/// Accounts and regions are sorted; zones keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AvailabilityZones(pub BTreeMap<String, BTreeMap<String, Vec<String>>>);

impl AvailabilityZones {
    /// Zones for an account and region, empty if unknown.
    #[cfg(test)]
    pub fn zones(&self, account: &str, region: &str) -> &[String] {
        self.0
            .get(account)
            .and_then(|regions| regions.get(region))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
