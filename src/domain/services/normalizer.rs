//! Location Normalizer
//!
//! Each upstream provider answers in its own shape with its own
//! success/error signaling convention. The shapes are represented as one
//! tagged union so that a single normalization entry point turns any raw
//! payload into the canonical `LocationData`, or `None` when the payload
//! carries no usable data.

use crate::domain::entities::LocationData;
use crate::domain::value_objects::{LocationSource, ProviderKind};
use serde::Deserialize;

/// Raw payload from ipapi.co.
///
/// Errors and reserved/private addresses are signaled via boolean flags on
/// an otherwise normal body.
#[derive(Debug, Clone, Deserialize)]
pub struct IpapiCoPayload {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub reserved: bool,
    pub city: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    pub country_name: Option<String>,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Raw payload from ip-api.com.
///
/// Success is signaled by `status == "success"`; a failed lookup answers
/// `status == "fail"` with 200 OK.
#[derive(Debug, Clone, Deserialize)]
pub struct IpApiComPayload {
    pub status: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    /// Full country name
    pub country: Option<String>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    pub timezone: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Raw payload from ipinfo.io.
///
/// Reserved/private addresses are signaled via `bogon: true`; coordinates
/// arrive as a single `"lat,lon"` string.
#[derive(Debug, Clone, Deserialize)]
pub struct IpInfoPayload {
    #[serde(default)]
    pub bogon: bool,
    pub city: Option<String>,
    pub region: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    pub loc: Option<String>,
    pub timezone: Option<String>,
}

/// One provider's raw response, tagged by shape.
#[derive(Debug, Clone)]
pub enum ProviderResponse {
    IpapiCo(IpapiCoPayload),
    IpApiCom(IpApiComPayload),
    IpInfo(IpInfoPayload),
}

impl ProviderResponse {
    /// Which provider produced this payload.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::IpapiCo(_) => ProviderKind::IpapiCo,
            Self::IpApiCom(_) => ProviderKind::IpApiCom,
            Self::IpInfo(_) => ProviderKind::IpInfo,
        }
    }

    /// Normalize the payload into the canonical location shape.
    ///
    /// Returns `None` when the payload signals an error, a reserved/private
    /// address, or a missing success status. Pure transformation, no side
    /// effects.
    pub fn normalize(&self) -> Option<LocationData> {
        match self {
            Self::IpapiCo(p) => {
                if p.error || p.reserved {
                    return None;
                }
                Some(LocationData {
                    city: clean(&p.city),
                    country: clean(&p.country),
                    country_name: clean(&p.country_name),
                    region: clean(&p.region),
                    timezone: clean(&p.timezone),
                    latitude: p.latitude,
                    longitude: p.longitude,
                    source: LocationSource::Live,
                    service: Some(ProviderKind::IpapiCo),
                })
            }
            Self::IpApiCom(p) => {
                if p.status.as_deref() != Some("success") {
                    return None;
                }
                Some(LocationData {
                    city: clean(&p.city),
                    country: clean(&p.country_code),
                    country_name: clean(&p.country),
                    region: clean(&p.region_name),
                    timezone: clean(&p.timezone),
                    latitude: p.lat,
                    longitude: p.lon,
                    source: LocationSource::Live,
                    service: Some(ProviderKind::IpApiCom),
                })
            }
            Self::IpInfo(p) => {
                if p.bogon {
                    return None;
                }
                let (latitude, longitude) = p
                    .loc
                    .as_deref()
                    .and_then(parse_loc)
                    .map_or((None, None), |(lat, lon)| (Some(lat), Some(lon)));
                Some(LocationData {
                    city: clean(&p.city),
                    country: clean(&p.country),
                    country_name: None,
                    region: clean(&p.region),
                    timezone: clean(&p.timezone),
                    latitude,
                    longitude,
                    source: LocationSource::Live,
                    service: Some(ProviderKind::IpInfo),
                })
            }
        }
    }
}

/// Drop empty and whitespace-only strings.
fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse an ipinfo.io `"lat,lon"` coordinates string.
///
/// A malformed string yields no coordinates rather than an error.
fn parse_loc(loc: &str) -> Option<(f64, f64)> {
    let (lat, lon) = loc.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}
