//! Serialized batch resolution of postal codes.

use crate::geocoder::Geocoder;
use lifelink_types::GeoPoint;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Resolves batches of postal codes one request at a time, pausing between
/// requests so the upstream service's rate limit is respected. One code's
/// failure never aborts the rest of the batch: the code is logged, skipped,
/// and its candidates simply stay unlocated.
pub struct BatchResolver {
    geocoder: Arc<dyn Geocoder>,
    pause: Duration,
    serialize: Mutex<()>,
}

impl BatchResolver {
    /// Creates a resolver pausing `pause` between upstream requests.
    pub fn new(geocoder: Arc<dyn Geocoder>, pause: Duration) -> Self {
        Self { geocoder, pause, serialize: Mutex::new(()) }
    }

    /// Resolves every distinct code in `postal_codes`. Codes that fail or
    /// resolve to nothing are absent from the result; callers treat absence
    /// as "no coordinate available" and carry on.
    #[instrument(skip(self, postal_codes))]
    pub async fn resolve_all<I, S>(&self, postal_codes: I) -> HashMap<String, GeoPoint>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // One batch at a time across all callers; the pacing below is
        // meaningless if two batches interleave.
        let _guard = self.serialize.lock().await;

        let mut resolved = HashMap::new();
        let mut seen = HashSet::new();
        let mut first = true;

        for code in postal_codes {
            let code = code.as_ref();
            if !seen.insert(code.to_string()) {
                continue;
            }
            if !first {
                tokio::time::sleep(self.pause).await;
            }
            first = false;

            match self.geocoder.resolve(code).await {
                Ok(Some(point)) => {
                    resolved.insert(code.to_string(), point);
                }
                Ok(None) => {
                    debug!(postal_code = code, "no coordinate known for postal code");
                }
                Err(error) => {
                    warn!(postal_code = code, %error, "geocoding failed, skipping code");
                }
            }
        }

        resolved
    }
}
