#![deny(warnings)]
//! Postal-code resolution collaborators for the Lifelink engine.
//!
//! The engine only ever consumes already-resolved coordinates. This crate
//! holds the capability trait callers implement against their geocoding
//! service, a caching wrapper so repeated lookups stay off the wire, and a
//! batch resolver that paces requests to respect upstream rate limits.

/// Caching wrapper around a geocoder
pub mod cached;
/// Resolution configuration
pub mod config;
/// The geocoding capability trait
pub mod geocoder;
/// Serialized, paced batch resolution
pub mod resolver;

pub use cached::{CacheStats, CachedGeocoder};
pub use config::GeocodeConfig;
pub use geocoder::{GeocodeError, Geocoder};
pub use resolver::BatchResolver;
