//! Public IP lookup through an HTTP echo service.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::LookupError;
use crate::config::NetworkConfig;
use crate::constants::{APP_NAME, VERSION};
use crate::models::Lookup;

/// Something that can report this machine's public address.
#[async_trait]
pub trait PublicIpSource: Send + Sync {
    async fn fetch(&self) -> Result<String, LookupError>;
}

/// Resolve the public IP, degrading to [`Lookup::Unknown`] on any failure.
pub async fn public_ip(source: &dyn PublicIpSource) -> Lookup {
    match source.fetch().await {
        Ok(ip) => Lookup::from(ip),
        Err(e) => {
            tracing::debug!("public IP lookup failed: {e}");
            Lookup::Unknown
        }
    }
}

/// Body returned by `?format=json` echo services.
#[derive(Debug, Deserialize)]
struct EchoResponse {
    ip: Option<String>,
}

/// Queries an ipify-compatible endpoint with a fixed timeout.
#[derive(Debug, Clone)]
pub struct IpEchoClient {
    url: String,
    timeout: Duration,
}

impl IpEchoClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.ip_echo_url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PublicIpSource for IpEchoClient {
    async fn fetch(&self) -> Result<String, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(format!("{APP_NAME}/{VERSION}"))
            .build()?;

        let body: EchoResponse = client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        body.ip
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
            .ok_or(LookupError::MissingField("ip"))
    }
}

/// Source used with `--offline`: never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl PublicIpSource for OfflineSource {
    async fn fetch(&self) -> Result<String, LookupError> {
        Err(LookupError::Disabled)
    }
}
