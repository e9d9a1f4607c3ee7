//! ipinfo.io Provider Client
//!
//! Last provider in the chain. Reserved/private addresses answer with
//! `bogon: true`; coordinates arrive as a single `loc` string.

use crate::domain::ports::{ProviderClient, ProviderError};
use crate::domain::services::{IpInfoPayload, ProviderResponse};
use crate::domain::value_objects::ProviderKind;
use async_trait::async_trait;

/// HTTP client for ipinfo.io.
pub struct IpInfoClient {
    http: reqwest::Client,
    base_url: String,
}

impl IpInfoClient {
    /// Create a client against the public endpoint.
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, "https://ipinfo.io")
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
impl ProviderClient for IpInfoClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::IpInfo
    }

    async fn fetch(&self, ip: &str) -> Result<ProviderResponse, ProviderError> {
        let url = format!("{}/{}/json", self.base_url, ip);
        let resp = self.http.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status()));
        }

        let payload: IpInfoPayload = resp.json().await?;
        Ok(ProviderResponse::IpInfo(payload))
    }
}
