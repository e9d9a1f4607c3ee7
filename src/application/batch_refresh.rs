//! Batch Refresh Orchestrator
//!
//! Walks a device list, selects the records whose stored location is
//! unknown and still unresolved, and drives them through the resolver one
//! at a time. A processed set scoped to the device-list lifecycle keeps a
//! recomputed list from re-triggering the same IPs.

use crate::application::resolver_service::LocationResolverService;
use crate::domain::entities::DeviceLocationRef;
use crate::domain::services::{has_unknown_stored_location, is_unresolvable_ip};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Orchestrator re-resolving devices with unknown stored locations.
pub struct BatchRefreshOrchestrator {
    resolver: Arc<LocationResolverService>,
    processed: Mutex<HashSet<String>>,
}

impl BatchRefreshOrchestrator {
    pub fn new(resolver: Arc<LocationResolverService>) -> Self {
        Self {
            resolver,
            processed: Mutex::new(HashSet::new()),
        }
    }

    /// React to a change in the device list.
    ///
    /// Selects the IPs that are present, not a non-resolvable sentinel,
    /// stored as unknown, not yet processed this lifecycle, not currently
    /// in flight, and not freshly cached. All selected IPs are claimed in
    /// the processed set before the first resolution starts, so a device
    /// list recomputed mid-resolution cannot select them again. Selected
    /// IPs are then resolved strictly one at a time, in list order, to
    /// stay friendly to rate-limited providers.
    ///
    /// Returns how many resolutions were driven.
    pub async fn sync_devices(&self, devices: &[DeviceLocationRef]) -> usize {
        let mut candidates: Vec<String> = Vec::new();
        {
            let processed = self.processed.lock();
            for device in devices {
                let ip = device.ip.trim();
                if is_unresolvable_ip(ip) {
                    continue;
                }
                if !has_unknown_stored_location(&device.location) {
                    continue;
                }
                if processed.contains(ip) {
                    continue;
                }
                if self.resolver.is_resolving(ip) {
                    continue;
                }
                if candidates.iter().any(|c| c == ip) {
                    continue;
                }
                candidates.push(ip.to_string());
            }
        }

        // Cache lookups are async, so they happen outside the lock.
        let mut selected: Vec<String> = Vec::new();
        for ip in candidates {
            if self.resolver.has_cached(&ip).await {
                continue;
            }
            selected.push(ip);
        }

        {
            let mut processed = self.processed.lock();
            selected.retain(|ip| processed.insert(ip.clone()));
        }

        if selected.is_empty() {
            return 0;
        }
        tracing::debug!("batch refresh driving {} unknown device IPs", selected.len());

        for ip in &selected {
            self.resolver.fetch_location(ip).await;
        }

        selected.len()
    }

    /// Start a new device-list lifecycle, forgetting processed IPs.
    pub fn reset(&self) {
        self.processed.lock().clear();
    }

    /// Whether an IP has already been triggered this lifecycle.
    pub fn was_processed(&self, ip: &str) -> bool {
        self.processed.lock().contains(ip.trim())
    }

    /// Number of IPs triggered this lifecycle.
    pub fn processed_count(&self) -> usize {
        self.processed.lock().len()
    }
}
