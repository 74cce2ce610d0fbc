//! Record-fetch seam between the engine and the caller's storage layer.

use async_trait::async_trait;
use lifelink_types::Donation;
use uuid::Uuid;

/// Supplies donation history for a donor.
///
/// Implementations live in the caller's storage layer; the engine only
/// consumes the records. The contract:
///
/// * the returned history is ordered newest first;
/// * each record's `urgency` is already normalized to a single optional
///   value — upstream joins sometimes materialize the associated request as
///   an array or a nested object, and providers collapse that (treating
///   malformed data as absent) before records reach the engine.
#[async_trait]
pub trait DonationSource: Send + Sync {
    /// Fetches the donation history for `donor_id`, newest first.
    async fn donation_history(&self, donor_id: Uuid) -> anyhow::Result<Vec<Donation>>;
}
