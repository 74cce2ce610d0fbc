use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// ABO/Rh blood group. The set is closed: every value the system works with
/// is one of these eight, and free-text input must go through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    /// O Rh-negative, the universal donor.
    #[serde(rename = "O-")]
    ONeg,
    /// O Rh-positive.
    #[serde(rename = "O+")]
    OPos,
    /// A Rh-negative.
    #[serde(rename = "A-")]
    ANeg,
    /// A Rh-positive.
    #[serde(rename = "A+")]
    APos,
    /// B Rh-negative.
    #[serde(rename = "B-")]
    BNeg,
    /// B Rh-positive.
    #[serde(rename = "B+")]
    BPos,
    /// AB Rh-negative.
    #[serde(rename = "AB-")]
    ABNeg,
    /// AB Rh-positive, the universal recipient.
    #[serde(rename = "AB+")]
    ABPos,
}

impl BloodGroup {
    /// All eight groups, in the conventional chart order.
    pub const ALL: [Self; 8] = [
        Self::ONeg,
        Self::OPos,
        Self::ANeg,
        Self::APos,
        Self::BNeg,
        Self::BPos,
        Self::ABNeg,
        Self::ABPos,
    ];

    /// Clinical notation for this group (`"O-"`, `"AB+"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ONeg => "O-",
            Self::OPos => "O+",
            Self::ANeg => "A-",
            Self::APos => "A+",
            Self::BNeg => "B-",
            Self::BPos => "B+",
            Self::ABNeg => "AB-",
            Self::ABPos => "AB+",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name one of the eight blood groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blood group '{0}'")]
pub struct ParseBloodGroupError(pub String);

impl FromStr for BloodGroup {
    type Err = ParseBloodGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "O-" => Ok(Self::ONeg),
            "O+" => Ok(Self::OPos),
            "A-" => Ok(Self::ANeg),
            "A+" => Ok(Self::APos),
            "B-" => Ok(Self::BNeg),
            "B+" => Ok(Self::BPos),
            "AB-" => Ok(Self::ABNeg),
            "AB+" => Ok(Self::ABPos),
            other => Err(ParseBloodGroupError(other.to_string())),
        }
    }
}

/// Lifecycle state of a donation offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    /// Offered but not yet confirmed by the recipient.
    Pending,
    /// Confirmed complete by the recipient. Only completed donations count
    /// toward eligibility and achievements.
    Completed,
    /// Withdrawn or rejected.
    Cancelled,
}

/// Urgency of the blood request a donation responded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestUrgency {
    /// Routine stock replenishment.
    Low,
    /// Planned procedure.
    Medium,
    /// Needed soon.
    High,
    /// Needed within hours.
    Urgent,
    /// Life-threatening.
    Critical,
}

/// A single donation record, as handed to the engine by the caller's storage
/// layer. The urgency is the already-normalized urgency of the associated
/// request: providers collapse whatever nested join shape their storage
/// returns into one optional value, and malformed data becomes `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Record identity.
    pub id: Uuid,
    /// When the donation was performed.
    pub donated_at: DateTime<Utc>,
    /// Lifecycle state.
    pub status: DonationStatus,
    /// Urgency of the associated request, if any was recorded.
    pub urgency: Option<RequestUrgency>,
}

/// Eligibility verdict for one donor at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Whether the donor may donate now.
    pub is_eligible: bool,
    /// Whole days until the donor becomes eligible; 0 when already eligible.
    pub days_remaining: u32,
    /// The instant the recovery window ends (equals `now` for a donor who
    /// has never donated).
    pub next_eligible: DateTime<Utc>,
}

/// Criterion predicates available to special achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCriterion {
    /// Donated in response to an urgent or critical request.
    UrgentResponse,
}

/// How an achievement unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AchievementKind {
    /// Unlocks once the donor's completed-donation count reaches `threshold`.
    CountThreshold {
        /// Completed donations required.
        threshold: u32,
    },
    /// Unlocks when any completed donation satisfies the named criterion.
    SpecialCriterion {
        /// Predicate to test each completed donation against.
        criterion: SpecialCriterion,
    },
}

/// A configuration-like achievement entry. Definitions are fixed at
/// deployment; they are never created or mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    /// Stable identifier, e.g. `"regular_donor"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Points granted when the achievement unlocks.
    pub reward_points: u32,
    /// Unlock rule.
    pub kind: AchievementKind,
}

/// Derived, ephemeral unlock state for one definition. Recomputed on every
/// evaluation; never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStatus {
    /// The definition this status describes.
    pub definition: AchievementDefinition,
    /// Whether the achievement is unlocked.
    pub unlocked: bool,
    /// When it unlocked, where that instant is known from the history.
    pub unlocked_at: Option<DateTime<Utc>>,
    /// Progress toward the unlock condition.
    pub progress: u32,
    /// Progress value at which the achievement unlocks.
    pub threshold: u32,
}

/// Result of evaluating a donor's history against a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementReport {
    /// One status per catalog definition, in catalog order.
    pub statuses: Vec<AchievementStatus>,
    /// Per-donation points plus reward points of every unlocked achievement.
    pub total_points: u64,
}

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new point.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite numbers. Points that fail this
    /// check are treated the same as missing locations.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// A donor considered for proximity ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Donor identity.
    pub id: Uuid,
    /// The donor's blood group.
    pub blood_group: BloodGroup,
    /// Resolved location, if the donor's address could be geocoded.
    pub location: Option<GeoPoint>,
    /// Distance from the reference point, filled in by the ranker.
    pub distance_km: Option<f64>,
}

impl Candidate {
    /// Creates a candidate with no distance computed yet.
    pub const fn new(id: Uuid, blood_group: BloodGroup, location: Option<GeoPoint>) -> Self {
        Self { id, blood_group, location, distance_km: None }
    }
}
