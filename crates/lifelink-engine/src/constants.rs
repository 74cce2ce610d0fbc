//! Domain constants used throughout the Lifelink engine.
//!
//! This module centralizes the numbers the product depends on so call sites
//! never hardcode them; anything deployment-tunable is also exposed through
//! [`crate::config::EngineConfig`].

/// Donor recovery constants
pub mod eligibility {
    /// Days a donor must wait after a completed donation before donating
    /// again. 90 is the conservative whole-blood interval; deployments that
    /// follow the 56-day interval lower it through configuration rather
    /// than by editing this constant.
    pub const DEFAULT_RECOVERY_WINDOW_DAYS: u32 = 90;
}

/// Reward scoring constants
pub mod scoring {
    /// Points granted for every completed donation, before badge rewards.
    pub const DEFAULT_POINTS_PER_DONATION: u32 = 10;
}

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers, as used by the haversine formula.
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Default cap on nearest-donor results.
    pub const DEFAULT_NEARBY_LIMIT: usize = 20;
}
