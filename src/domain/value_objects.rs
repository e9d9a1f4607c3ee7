//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Identity of an upstream geolocation provider.
///
/// The variants are listed in chain priority order: the most accurate and
/// rate-generous provider first, the coarsest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// ipapi.co - signals unusable data via `error`/`reserved` flags
    IpapiCo,
    /// ip-api.com - signals success via a `status` string
    IpApiCom,
    /// ipinfo.io - signals reserved addresses via a `bogon` flag,
    /// coordinates arrive as a single `loc` string
    IpInfo,
}

impl ProviderKind {
    /// Convert to the provider's public hostname.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IpapiCo => "ipapi.co",
            Self::IpApiCom => "ip-api.com",
            Self::IpInfo => "ipinfo.io",
        }
    }

    /// The fixed chain order in which providers are tried.
    pub fn chain_order() -> [ProviderKind; 3] {
        [Self::IpapiCo, Self::IpApiCom, Self::IpInfo]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provenance of a `LocationData` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    /// Resolved live from an upstream provider
    Live,
    /// Placeholder recorded after the provider chain was exhausted
    Failed,
}
