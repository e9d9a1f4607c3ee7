//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of IP-to-location resolution.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::{LocationSource, ProviderKind};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Geographic location resolved for an IP address.
///
/// All geographic fields are optional because providers differ in coverage.
/// The provenance fields tell the caller whether this is a live-resolved
/// value (`source == Live`, `service` names the producing provider) or a
/// failure placeholder (`source == Failed`, no geographic data at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// City name, if the provider reported one
    pub city: Option<String>,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,
    /// Full country name
    pub country_name: Option<String>,
    /// Region / state name
    pub region: Option<String>,
    /// IANA timezone identifier
    pub timezone: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Whether this value was live-resolved or is a failure placeholder
    pub source: LocationSource,
    /// Which provider produced this value (live resolutions only)
    pub service: Option<ProviderKind>,
}

impl LocationData {
    /// Create a failure placeholder.
    ///
    /// Invariant: a failed value carries no geographic fields and no
    /// producing service, never a mix of real and placeholder data.
    pub fn failed() -> Self {
        Self {
            city: None,
            country: None,
            country_name: None,
            region: None,
            timezone: None,
            latitude: None,
            longitude: None,
            source: LocationSource::Failed,
            service: None,
        }
    }

    /// Whether this value was resolved live from a provider.
    pub fn is_live(&self) -> bool {
        self.source == LocationSource::Live
    }

    /// Minimal display contract: "City, Country" best-effort.
    ///
    /// Failure placeholders and empty values render as "Unknown"; richer
    /// formatting/localization belongs to the consuming UI.
    pub fn display_text(&self) -> String {
        let city = self.city.as_deref().unwrap_or("").trim();
        let country = self
            .country_name
            .as_deref()
            .or(self.country.as_deref())
            .unwrap_or("")
            .trim();

        match (city.is_empty(), country.is_empty()) {
            (false, false) => format!("{}, {}", city, country),
            (false, true) => city.to_string(),
            (true, false) => country.to_string(),
            (true, true) => "Unknown".to_string(),
        }
    }
}

/// One cached resolution outcome for an IP.
///
/// Owned exclusively by the cache and replaced wholesale on refresh,
/// never mutated in place. An entry older than the retention window is
/// treated as absent at read time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// IP address this entry belongs to
    pub ip: String,
    /// Resolution outcome (success or failure placeholder)
    pub data: LocationData,
    /// When the resolution completed
    pub resolved_at: Instant,
}

impl CacheEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(ip: String, data: LocationData) -> Self {
        Self {
            ip,
            data,
            resolved_at: Instant::now(),
        }
    }
}

/// Snapshot of cache contents for diagnostics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of live (non-expired) entries
    pub size: usize,
    /// IPs currently cached
    pub keys: Vec<String>,
}

/// Stored location fields of a device record.
///
/// Either field may itself hold a legacy JSON-encoded object string,
/// an artifact of an earlier schema version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredLocation {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// The subset of a device record relevant to location resolution.
///
/// Read-only input: the core never writes resolved locations back to the
/// device record, it only returns results for the caller to display or
/// persist elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceLocationRef {
    /// Raw IP address string (IPv4/IPv6 textual form, or a sentinel)
    pub ip: String,
    /// Stored location as last persisted by the backend
    #[serde(default)]
    pub location: StoredLocation,
}

impl DeviceLocationRef {
    pub fn new(ip: impl Into<String>, location: StoredLocation) -> Self {
        Self {
            ip: ip.into(),
            location,
        }
    }
}
