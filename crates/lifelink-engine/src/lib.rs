#![deny(warnings)]
#![allow(missing_docs)]
//! Core matching and eligibility calculations for the Lifelink platform.
//!
//! Everything in this crate is a synchronous, side-effect-free function over
//! records the caller has already fetched: blood-type compatibility lookup,
//! donor cooling-off assessment, achievement evaluation, and nearest-donor
//! ranking. The engine performs no I/O and owns no mutable state, so it is
//! safe to call concurrently from any number of callers.

/// Badge catalog and evaluation over donation history
pub mod achievements;
/// Blood-type compatibility chart and queries
pub mod compatibility;
/// Engine configuration loading
pub mod config;
/// Centralized domain constants
pub mod constants;
/// Donor cooling-off assessment
pub mod eligibility;
/// Great-circle distance and nearest-donor ranking
pub mod proximity;
/// Record-fetch seam implemented by the caller's storage layer
pub mod source;

// Re-export the engine surface for callers that don't care about modules
pub use achievements::{AchievementCatalog, evaluate};
pub use compatibility::{
    compatible_donors, compatible_recipients, is_compatible, is_universal_donor,
    is_universal_recipient,
};
pub use config::{ConfigError, EngineConfig};
pub use eligibility::{assess, assess_from_history, last_completed_donation};
pub use proximity::{haversine_km, rank_nearby, within_radius};
pub use source::DonationSource;
