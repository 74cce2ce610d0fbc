//! The geocoding capability trait.

use async_trait::async_trait;
use lifelink_types::GeoPoint;
use thiserror::Error;

/// Errors surfaced by a geocoding provider.
#[derive(Debug, Clone, Error)]
pub enum GeocodeError {
    /// The upstream service failed or rejected the request. The attempt may
    /// be retried later; the result is not cached.
    #[error("geocoding provider failure for '{postal_code}': {message}")]
    Provider {
        /// The code whose lookup failed.
        postal_code: String,
        /// Provider-reported reason.
        message: String,
    },
    /// The postal code is not syntactically usable.
    #[error("postal code '{0}' is not well formed")]
    InvalidPostalCode(String),
}

/// Resolves postal codes to coordinates.
///
/// `Ok(None)` means the provider answered and knows no coordinate for the
/// code; an error means the attempt itself failed. Implementations wrap the
/// caller's external geocoding service and are free to be as dumb as an
/// HTTP GET — caching and pacing live in [`crate::CachedGeocoder`] and
/// [`crate::BatchResolver`].
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves one postal code.
    async fn resolve(&self, postal_code: &str) -> Result<Option<GeoPoint>, GeocodeError>;
}
