//! DashMap Location Cache
//!
//! Implements LocationCache using DashMap for lock-free concurrent access.
//! Expiry is lazy: a stale entry is dropped the first time a read touches
//! it, there is no background sweep.

use crate::domain::entities::{CacheEntry, CacheStats, LocationData};
use crate::domain::ports::LocationCache;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

/// Retention window applied uniformly to successful and failed resolutions.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(24 * 60 * 60);

/// DashMap-backed resolution cache.
pub struct DashMapLocationCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    retention: Duration,
}

impl DashMapLocationCache {
    /// Create a cache with the standard 24-hour retention window.
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETENTION)
    }

    /// Create a cache with a custom retention window (used by tests).
    pub fn with_retention(retention: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            retention,
        }
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        entry.resolved_at.elapsed() < self.retention
    }
}

impl Default for DashMapLocationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationCache for DashMapLocationCache {
    async fn get(&self, ip: &str) -> Option<CacheEntry> {
        if let Some(entry) = self.entries.get(ip) {
            if self.is_fresh(entry.value()) {
                return Some(entry.value().clone());
            }
            drop(entry);
            self.entries.remove(ip);
        }
        None
    }

    async fn put(&self, ip: &str, data: LocationData) {
        self.entries
            .insert(ip.to_string(), CacheEntry::new(ip.to_string(), data));
    }

    async fn remove(&self, ip: &str) {
        self.entries.remove(ip);
    }

    async fn clear(&self) {
        self.entries.clear();
    }

    async fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| self.is_fresh(e.value()))
            .count()
    }

    async fn stats(&self) -> CacheStats {
        let keys: Vec<String> = self
            .entries
            .iter()
            .filter(|e| self.is_fresh(e.value()))
            .map(|e| e.key().clone())
            .collect();
        CacheStats {
            size: keys.len(),
            keys,
        }
    }
}
