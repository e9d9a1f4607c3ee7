//! Resolution Cache Port
//!
//! Defines the interface for the time-bounded store of resolution outcomes.

use crate::domain::entities::{CacheEntry, CacheStats, LocationData};
use async_trait::async_trait;

/// Cache mapping IP -> last resolution outcome.
///
/// Successful and failed resolutions are cached alike, under the same
/// retention window. Implementations treat an entry older than the window
/// as absent at read time; no background sweep is required.
#[async_trait]
pub trait LocationCache: Send + Sync {
    /// Get the fresh entry for an IP, if one exists within the window.
    async fn get(&self, ip: &str) -> Option<CacheEntry>;

    /// Store a resolution outcome, replacing any previous entry wholesale.
    async fn put(&self, ip: &str, data: LocationData);

    /// Evict the entry for an IP.
    async fn remove(&self, ip: &str);

    /// Drop all entries.
    async fn clear(&self);

    /// Number of fresh entries.
    async fn len(&self) -> usize;

    /// Snapshot of fresh entries for diagnostics.
    async fn stats(&self) -> CacheStats;
}
