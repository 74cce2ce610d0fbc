//! Great-circle distance and nearest-donor ranking.
//!
//! The ranker is a pure recomputation over the candidate set it is handed —
//! at a few hundred to low thousands of candidates a full sort per query is
//! cheaper than maintaining any spatial index. Candidates without a usable
//! location are excluded outright, never ranked with a sentinel distance.

use crate::constants::geo::EARTH_RADIUS_KM;
use lifelink_types::{Candidate, GeoPoint};
use tracing::instrument;

/// Haversine distance between two points, in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// The `limit` candidates closest to `reference`, distances filled in,
/// sorted ascending. Ties keep their input order.
#[instrument(skip(candidates), fields(candidate_count = candidates.len()))]
pub fn rank_nearby(reference: GeoPoint, candidates: &[Candidate], limit: usize) -> Vec<Candidate> {
    let mut ranked: Vec<(f64, Candidate)> = candidates
        .iter()
        .filter_map(|candidate| {
            let location = candidate.location.filter(GeoPoint::is_finite)?;
            let distance = haversine_km(reference, location);
            let mut augmented = candidate.clone();
            augmented.distance_km = Some(distance);
            Some((distance, augmented))
        })
        .collect();

    // Distances here are always finite, and the stable sort preserves input
    // order among equals.
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Candidates within `radius_km` of `reference`, distances filled in,
/// preserving input order.
pub fn within_radius(
    reference: GeoPoint,
    candidates: &[Candidate],
    radius_km: f64,
) -> Vec<Candidate> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let location = candidate.location.filter(GeoPoint::is_finite)?;
            let distance = haversine_km(reference, location);
            (distance <= radius_km).then(|| {
                let mut augmented = candidate.clone();
                augmented.distance_km = Some(distance);
                augmented
            })
        })
        .collect()
}
