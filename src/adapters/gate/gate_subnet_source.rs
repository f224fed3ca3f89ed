use std::time::Duration;

use crate::core::errors::{PipesError, Result};
use crate::core::models::subnet::Subnet;
use crate::core::traits::subnet_source::SubnetSource;

/// Timeout for the subnet lookup.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the subnet inventory from Gate's `/subnets/aws` endpoint.
pub struct GateSubnetSource {
    gate_url: String,
}

impl GateSubnetSource {
    pub fn new(gate_url: impl Into<String>) -> Self {
        Self {
            gate_url: gate_url.into(),
        }
    }

    pub fn subnets_url(&self) -> String {
        format!("{}/subnets/aws", self.gate_url.trim_end_matches('/'))
    }
}

/// Build a reqwest client with the lookup timeout.
fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(format!("pipes/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PipesError::GateRequestFailed {
            reason: format!("Failed to create HTTP client: {e}"),
        })
}

impl SubnetSource for GateSubnetSource {
    fn fetch(&self) -> Result<Vec<Subnet>> {
        let url = self.subnets_url();

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        rt.block_on(async {
            let client = build_client()?;
            let resp = client
                .get(&url)
                .send()
                .await
                .map_err(|e| PipesError::GateRequestFailed {
                    reason: format!("GET {url}: {e}"),
                })?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(PipesError::GateRequestFailed {
                    reason: format!("GET {url} returned {status}: {body}"),
                });
            }

            resp.json::<Vec<Subnet>>()
                .await
                .map_err(|e| PipesError::GateRequestFailed {
                    reason: format!("Invalid subnet list from {url}: {e}"),
                })
        })
    }
}
