//! ip-api.com Provider Client
//!
//! Second provider in the chain. Failed lookups answer 200 OK with
//! `status: "fail"`, so success is decided during normalization.

use crate::domain::ports::{ProviderClient, ProviderError};
use crate::domain::services::{IpApiComPayload, ProviderResponse};
use crate::domain::value_objects::ProviderKind;
use async_trait::async_trait;

/// HTTP client for ip-api.com.
pub struct IpApiComClient {
    http: reqwest::Client,
    base_url: String,
}

impl IpApiComClient {
    /// Create a client against the public endpoint.
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, "http://ip-api.com")
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProviderClient for IpApiComClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::IpApiCom
    }

    async fn fetch(&self, ip: &str) -> Result<ProviderResponse, ProviderError> {
        let url = format!("{}/json/{}", self.base_url, ip);
        let resp = self.http.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status()));
        }

        let payload: IpApiComPayload = resp.json().await?;
        Ok(ProviderResponse::IpApiCom(payload))
    }
}
