//! In-memory caching wrapper around a [`Geocoder`].

use crate::geocoder::{GeocodeError, Geocoder};
use async_trait::async_trait;
use lifelink_types::GeoPoint;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// A cache in front of any [`Geocoder`], so repeated lookups for the same
/// postal code cost one upstream request. Negative answers (`Ok(None)`) are
/// cached too; errors are not, so a transient failure can be retried.
#[derive(Debug)]
pub struct CachedGeocoder<G> {
    inner: G,
    cache: Cache<String, Option<GeoPoint>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<G: Geocoder> CachedGeocoder<G> {
    /// Wraps `inner` with a cache of at most `max_capacity` entries, each
    /// kept for `time_to_live_minutes`.
    pub fn new(inner: G, max_capacity: u64, time_to_live_minutes: u64) -> Self {
        let ttl = Duration::from_secs(time_to_live_minutes * 60);
        Self {
            inner,
            cache: Cache::builder().max_capacity(max_capacity).time_to_live(ttl).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Hit/miss statistics since construction.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}

#[async_trait]
impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn resolve(&self, postal_code: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        if let Some(cached) = self.cache.get(postal_code).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(cached);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let resolved = self.inner.resolve(postal_code).await?;
        self.cache.insert(postal_code.to_string(), resolved).await;
        Ok(resolved)
    }
}

/// Cache performance counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that went upstream.
    pub misses: u64,
    /// Entries currently cached.
    pub entries: u64,
}

impl CacheStats {
    /// Hit rate as a percentage of all lookups.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 { 0.0 } else { (self.hits as f64 / total as f64) * 100.0 }
    }
}
