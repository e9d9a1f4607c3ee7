//! Geolocation Provider Port
//!
//! Defines the interface for fetching one upstream provider's raw response
//! for an IP address.

use crate::domain::services::ProviderResponse;
use crate::domain::value_objects::ProviderKind;
use async_trait::async_trait;
use thiserror::Error;

/// Error raised by a provider adapter.
///
/// These never cross the resolver's public boundary: the provider chain
/// catches them per-provider and falls through to the next upstream.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network-level failure or response body that could not be decoded
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Client for one upstream geolocation provider.
///
/// This is an outbound port that abstracts a single HTTP upstream.
/// Each provider has its own response contract; the adapter returns the
/// raw payload tagged with its shape so normalization stays in the domain.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Which provider this client talks to.
    fn kind(&self) -> ProviderKind;

    /// Fetch the provider's raw response for the given IP.
    ///
    /// Returns the tagged payload on any 2xx response that decodes; payloads
    /// that signal "no usable data" are still `Ok` here and become `None`
    /// during normalization.
    async fn fetch(&self, ip: &str) -> Result<ProviderResponse, ProviderError>;
}
