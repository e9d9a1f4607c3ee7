//! ipapi.co Provider Client
//!
//! First provider in the chain. Lookup errors and reserved addresses are
//! signaled in-band via `error`/`reserved` flags on a 200 response.

use crate::domain::ports::{ProviderClient, ProviderError};
use crate::domain::services::{IpapiCoPayload, ProviderResponse};
use crate::domain::value_objects::ProviderKind;
use async_trait::async_trait;

/// HTTP client for ipapi.co.
pub struct IpapiCoClient {
    http: reqwest::Client,
    base_url: String,
}

impl IpapiCoClient {
    /// Create a client against the public endpoint.
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, "https://ipapi.co")
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
impl ProviderClient for IpapiCoClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::IpapiCo
    }

    async fn fetch(&self, ip: &str) -> Result<ProviderResponse, ProviderError> {
        let url = format!("{}/{}/json/", self.base_url, ip);
        let resp = self.http.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status()));
        }

        let payload: IpapiCoPayload = resp.json().await?;
        Ok(ProviderResponse::IpapiCo(payload))
    }
}
