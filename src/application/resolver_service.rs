//! Location Resolver Service - Main application use case
//!
//! Orchestrates resolution for one IP: request coalescing through an
//! in-flight set, cache consultation, and the fixed-order provider chain.
//! This is the only component that writes to the cache or the in-flight
//! set, so the read-check-write sequence cannot race with outside writers.

use crate::domain::entities::LocationData;
use crate::domain::ports::{LocationCache, ProviderClient};
use crate::domain::services::is_unresolvable_ip;
use dashmap::DashSet;
use std::sync::Arc;

/// Resolver service coordinating cache, in-flight tracking, and providers.
///
/// Constructed once per process and shared by reference; the cache and the
/// in-flight set are owned here rather than living as ambient globals.
pub struct LocationResolverService {
    cache: Arc<dyn LocationCache>,
    providers: Vec<Arc<dyn ProviderClient>>,
    in_flight: DashSet<String>,
}

/// Removes the in-flight marker when the resolution scope exits.
///
/// Drop runs on success, provider failure, and unwind alike, so a marker
/// can never leak and leave an IP permanently "in flight".
struct InFlightGuard<'a> {
    set: &'a DashSet<String>,
    ip: &'a str,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set.remove(self.ip);
    }
}

impl LocationResolverService {
    /// Create a new resolver service.
    ///
    /// Providers are tried in the order given; pass them most accurate and
    /// rate-generous first.
    pub fn new(cache: Arc<dyn LocationCache>, providers: Vec<Arc<dyn ProviderClient>>) -> Self {
        Self {
            cache,
            providers,
            in_flight: DashSet::new(),
        }
    }

    /// Resolve the location for an IP, coalescing concurrent requests.
    ///
    /// Sentinel IPs resolve to `None` without touching the network or the
    /// cache. If the IP is already being resolved, the caller receives the
    /// best currently-available answer (the cached value if one exists)
    /// instead of triggering a second round-trip. Otherwise: cache hit
    /// returns the stored data; cache miss runs the provider chain and
    /// records the outcome, failure included, before returning.
    pub async fn fetch_location(&self, ip: &str) -> Option<LocationData> {
        let ip = ip.trim();
        if is_unresolvable_ip(ip) {
            return None;
        }

        if !self.in_flight.insert(ip.to_string()) {
            tracing::debug!("resolution for {} already in flight", ip);
            return self.cache.get(ip).await.map(|entry| entry.data);
        }
        let _guard = InFlightGuard {
            set: &self.in_flight,
            ip,
        };

        if let Some(entry) = self.cache.get(ip).await {
            tracing::debug!("cache hit for {}", ip);
            return Some(entry.data);
        }

        let resolved = self.resolve_chain(ip).await;
        let outcome = resolved.clone().unwrap_or_else(LocationData::failed);
        self.cache.put(ip, outcome).await;

        resolved
    }

    /// Force a live re-resolution, ignoring any cached entry.
    pub async fn refresh_location(&self, ip: &str) -> Option<LocationData> {
        self.cache.remove(ip.trim()).await;
        self.fetch_location(ip).await
    }

    /// Whether a resolution for this IP is currently in flight.
    pub fn is_resolving(&self, ip: &str) -> bool {
        self.in_flight.contains(ip.trim())
    }

    /// IPs currently being resolved.
    pub fn resolving_ips(&self) -> Vec<String> {
        self.in_flight.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Whether a fresh cache entry exists for this IP.
    pub async fn has_cached(&self, ip: &str) -> bool {
        self.cache.get(ip.trim()).await.is_some()
    }

    /// The cache this resolver writes to.
    pub fn cache(&self) -> &Arc<dyn LocationCache> {
        &self.cache
    }

    /// Try each provider in priority order, returning the first usable
    /// normalization.
    ///
    /// Transport errors and no-data payloads both fall through to the next
    /// provider; an exhausted chain is a valid "no data found" outcome,
    /// not an error.
    async fn resolve_chain(&self, ip: &str) -> Option<LocationData> {
        for provider in &self.providers {
            match provider.fetch(ip).await {
                Ok(resp) => {
                    if let Some(data) = resp.normalize() {
                        tracing::debug!("resolved {} via {}", ip, provider.kind());
                        return Some(data);
                    }
                    tracing::debug!("no usable data from {} for {}", provider.kind(), ip);
                }
                Err(e) => {
                    tracing::debug!("provider {} failed for {}: {}", provider.kind(), ip, e);
                }
            }
        }

        tracing::warn!("all providers exhausted for {}", ip);
        None
    }
}
