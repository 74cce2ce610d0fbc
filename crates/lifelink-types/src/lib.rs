//! Lifelink Types
//!
//! This crate defines the core types and data structures shared across the
//! Lifelink ecosystem (currently `lifelink-engine` and `lifelink-geocode`).
//! It holds plain domain data plus parsing and display logic, and eliminates
//! circular dependencies between crates.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;

pub use types::{
    AchievementDefinition, AchievementKind, AchievementReport, AchievementStatus, BloodGroup,
    Candidate, Donation, DonationStatus, Eligibility, GeoPoint, ParseBloodGroupError,
    RequestUrgency, SpecialCriterion,
};
