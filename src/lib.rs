//! ip-locator Library
//!
//! Best-effort IP-to-location resolution over multiple unreliable upstream
//! providers, with a time-bounded cache, per-IP request coalescing, and
//! batch re-resolution of device records stored with a legacy "unknown"
//! location.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{
    DashMapLocationCache, IpApiComClient, IpInfoClient, IpapiCoClient, DEFAULT_RETENTION,
};
pub use application::{BatchRefreshOrchestrator, LocationResolverService};
pub use config::{load_config, Config};
pub use domain::entities::{
    CacheEntry, CacheStats, DeviceLocationRef, LocationData, StoredLocation,
};
pub use domain::ports::{LocationCache, ProviderClient, ProviderError};
pub use domain::services::{
    has_unknown_stored_location, is_unknown_location, is_unresolvable_ip, ProviderResponse,
};
pub use domain::value_objects::{LocationSource, ProviderKind};

use std::sync::Arc;

/// Wire up a resolver with the three standard providers and the DashMap
/// cache.
///
/// This is the composition root for library consumers: one shared reqwest
/// client carrying the configured timeout, providers in chain priority
/// order, and the retention window from config.
pub fn build_resolver(cfg: &Config) -> anyhow::Result<Arc<LocationResolverService>> {
    let http = reqwest::Client::builder()
        .timeout(cfg.request_timeout())
        .build()?;

    let cache = Arc::new(DashMapLocationCache::with_retention(cfg.cache_ttl()));
    let providers: Vec<Arc<dyn ProviderClient>> = vec![
        Arc::new(IpapiCoClient::with_base_url(
            http.clone(),
            cfg.ipapi_co_base_url.clone(),
        )),
        Arc::new(IpApiComClient::with_base_url(
            http.clone(),
            cfg.ip_api_com_base_url.clone(),
        )),
        Arc::new(IpInfoClient::with_base_url(
            http,
            cfg.ipinfo_base_url.clone(),
        )),
    ];

    tracing::info!(
        "location resolver wired with {} providers, cache ttl {}s",
        providers.len(),
        cfg.cache_ttl_secs
    );

    Ok(Arc::new(LocationResolverService::new(cache, providers)))
}
