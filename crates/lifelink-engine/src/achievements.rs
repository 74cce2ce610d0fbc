//! Badge catalog and evaluation over a donor's donation history.
//!
//! Evaluation is a full recomputation: every call derives unlock state and
//! points from scratch, so the report is always consistent with the history
//! passed in. Histories are tens of entries per donor, which makes the O(n)
//! rescans irrelevant.

use lifelink_types::{
    AchievementDefinition, AchievementKind, AchievementReport, AchievementStatus, Donation,
    DonationStatus, RequestUrgency, SpecialCriterion,
};
use tracing::instrument;

/// The fixed set of achievement definitions evaluated for every donor.
///
/// Definitions are registered once at startup; evaluation never mutates the
/// catalog. [`AchievementCatalog::standard`] holds the product's built-in
/// ladder, and custom catalogs can be assembled with [`AchievementCatalog::push`].
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    definitions: Vec<AchievementDefinition>,
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl AchievementCatalog {
    /// Creates an empty catalog.
    pub const fn new() -> Self {
        Self { definitions: Vec::new() }
    }

    /// The built-in catalog: the donation-count ladder plus the
    /// urgent-response badge.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.push(count_badge(
            "first_donation",
            "First Drop",
            "Complete your first donation.",
            50,
            1,
        ));
        catalog.push(count_badge(
            "regular_donor",
            "Regular Donor",
            "Complete five donations.",
            150,
            5,
        ));
        catalog.push(count_badge(
            "committed_donor",
            "Committed Donor",
            "Complete ten donations.",
            300,
            10,
        ));
        catalog.push(count_badge(
            "veteran_donor",
            "Veteran Donor",
            "Complete twenty-five donations.",
            750,
            25,
        ));
        catalog.push(count_badge(
            "golden_heart",
            "Golden Heart",
            "Complete fifty donations.",
            2000,
            50,
        ));
        catalog.push(AchievementDefinition {
            id: "emergency_responder".to_string(),
            name: "Emergency Responder".to_string(),
            description: "Donate in response to an urgent or critical request.".to_string(),
            reward_points: 200,
            kind: AchievementKind::SpecialCriterion {
                criterion: SpecialCriterion::UrgentResponse,
            },
        });
        catalog
    }

    /// Appends a definition. Report order follows registration order.
    pub fn push(&mut self, definition: AchievementDefinition) {
        self.definitions.push(definition);
    }

    /// The registered definitions, in registration order.
    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Evaluates a donor's history against a catalog.
///
/// `history` must be ordered newest first. Only completed donations count;
/// total points are the completed count times `points_per_donation` plus the
/// reward points of every unlocked achievement.
#[instrument(skip(history, catalog), fields(history_len = history.len()))]
pub fn evaluate(
    history: &[Donation],
    catalog: &AchievementCatalog,
    points_per_donation: u32,
) -> AchievementReport {
    let completed_count = history
        .iter()
        .filter(|donation| donation.status == DonationStatus::Completed)
        .count();

    let mut statuses = Vec::with_capacity(catalog.len());
    let mut badge_points: u64 = 0;

    for definition in catalog.definitions() {
        let status = match definition.kind {
            AchievementKind::CountThreshold { threshold } => {
                count_threshold_status(definition, history, completed_count, threshold)
            }
            AchievementKind::SpecialCriterion { criterion } => {
                special_status(definition, history, criterion)
            }
        };
        if status.unlocked {
            badge_points += u64::from(definition.reward_points);
        }
        statuses.push(status);
    }

    let total_points = completed_count as u64 * u64::from(points_per_donation) + badge_points;
    AchievementReport { statuses, total_points }
}

fn count_badge(
    id: &str,
    name: &str,
    description: &str,
    reward_points: u32,
    threshold: u32,
) -> AchievementDefinition {
    AchievementDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        reward_points,
        kind: AchievementKind::CountThreshold { threshold },
    }
}

fn count_threshold_status(
    definition: &AchievementDefinition,
    history: &[Donation],
    completed_count: usize,
    threshold: u32,
) -> AchievementStatus {
    let goal = threshold as usize;
    let unlocked = completed_count >= goal;
    // The unlock instant is when the donor's threshold-th completed donation
    // (counting from the oldest) was performed. Walking the history keeps
    // this bounds-safe even when counts and thresholds disagree.
    let unlocked_at = if unlocked {
        nth_completed_from_oldest(history, goal).map(|donation| donation.donated_at)
    } else {
        None
    };

    AchievementStatus {
        definition: definition.clone(),
        unlocked,
        unlocked_at,
        progress: completed_count.min(goal) as u32,
        threshold,
    }
}

fn special_status(
    definition: &AchievementDefinition,
    history: &[Donation],
    criterion: SpecialCriterion,
) -> AchievementStatus {
    // First qualifying completed donation, oldest first.
    let hit = history
        .iter()
        .rev()
        .find(|donation| {
            donation.status == DonationStatus::Completed && matches_criterion(criterion, donation)
        });

    AchievementStatus {
        definition: definition.clone(),
        unlocked: hit.is_some(),
        unlocked_at: hit.map(|donation| donation.donated_at),
        progress: u32::from(hit.is_some()),
        threshold: 1,
    }
}

/// The `n`-th completed donation counting from the oldest end (1-based) of a
/// newest-first history. `None` when the history holds fewer completed
/// entries than `n`; callers leave the unlock date unset in that case.
fn nth_completed_from_oldest(history: &[Donation], n: usize) -> Option<&Donation> {
    if n == 0 {
        return None;
    }
    history
        .iter()
        .rev()
        .filter(|donation| donation.status == DonationStatus::Completed)
        .nth(n - 1)
}

fn matches_criterion(criterion: SpecialCriterion, donation: &Donation) -> bool {
    match criterion {
        SpecialCriterion::UrgentResponse => matches!(
            donation.urgency,
            Some(RequestUrgency::Urgent | RequestUrgency::Critical)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    const POINTS_PER_DONATION: u32 = 10;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::days(i64::from(day))
    }

    fn completed(day: u32) -> Donation {
        Donation {
            id: Uuid::new_v4(),
            donated_at: at(day),
            status: DonationStatus::Completed,
            urgency: Some(RequestUrgency::Medium),
        }
    }

    /// Newest-first history of `n` completed donations, one per day.
    fn history_of(n: u32) -> Vec<Donation> {
        (0..n).rev().map(completed).collect()
    }

    fn threshold_catalog(threshold: u32, reward_points: u32) -> AchievementCatalog {
        let mut catalog = AchievementCatalog::new();
        catalog.push(count_badge("badge", "Badge", "Test badge.", reward_points, threshold));
        catalog
    }

    #[test]
    fn threshold_reached_unlocks_with_full_progress() {
        let report = evaluate(&history_of(5), &threshold_catalog(5, 100), POINTS_PER_DONATION);
        let status = &report.statuses[0];
        assert!(status.unlocked);
        assert_eq!(status.progress, 5);
        assert_eq!(status.threshold, 5);
    }

    #[test]
    fn threshold_not_reached_tracks_progress() {
        let report = evaluate(&history_of(4), &threshold_catalog(5, 100), POINTS_PER_DONATION);
        let status = &report.statuses[0];
        assert!(!status.unlocked);
        assert_eq!(status.progress, 4);
        assert_eq!(status.unlocked_at, None);
    }

    #[test]
    fn unlock_date_is_the_nth_completed_donation_from_the_oldest() {
        // Seven completed donations on days 0..=6; a threshold of 5 unlocked
        // on day 4, regardless of the two later donations.
        let report = evaluate(&history_of(7), &threshold_catalog(5, 100), POINTS_PER_DONATION);
        assert_eq!(report.statuses[0].unlocked_at, Some(at(4)));
    }

    #[test]
    fn pending_and_cancelled_donations_do_not_count() {
        let mut history = history_of(4);
        history.insert(
            0,
            Donation {
                id: Uuid::new_v4(),
                donated_at: at(10),
                status: DonationStatus::Pending,
                urgency: None,
            },
        );
        history.push(Donation {
            id: Uuid::new_v4(),
            donated_at: at(0),
            status: DonationStatus::Cancelled,
            urgency: None,
        });

        let report = evaluate(&history, &threshold_catalog(5, 100), POINTS_PER_DONATION);
        assert!(!report.statuses[0].unlocked);
        assert_eq!(report.statuses[0].progress, 4);
    }

    #[test]
    fn urgent_response_unlocks_on_first_qualifying_donation() {
        let mut history = history_of(3);
        history[1].urgency = Some(RequestUrgency::Critical); // day 1
        history[2].urgency = Some(RequestUrgency::Urgent); // day 0, oldest

        let mut catalog = AchievementCatalog::new();
        catalog.push(AchievementDefinition {
            id: "emergency_responder".to_string(),
            name: "Emergency Responder".to_string(),
            description: String::new(),
            reward_points: 200,
            kind: AchievementKind::SpecialCriterion {
                criterion: SpecialCriterion::UrgentResponse,
            },
        });

        let report = evaluate(&history, &catalog, POINTS_PER_DONATION);
        let status = &report.statuses[0];
        assert!(status.unlocked);
        assert_eq!(status.progress, 1);
        assert_eq!(status.unlocked_at, Some(at(0)));
    }

    #[test]
    fn missing_urgency_never_matches_and_never_aborts() {
        let history = history_of(3)
            .into_iter()
            .map(|mut donation| {
                donation.urgency = None;
                donation
            })
            .collect::<Vec<_>>();

        let report = evaluate(&history, &AchievementCatalog::standard(), POINTS_PER_DONATION);
        let responder = report
            .statuses
            .iter()
            .find(|status| status.definition.id == "emergency_responder")
            .unwrap();
        assert!(!responder.unlocked);
        assert_eq!(responder.progress, 0);
    }

    #[test]
    fn total_points_without_badges_is_count_times_rate() {
        // Thresholds far above the history size: no badge unlocks.
        let report = evaluate(&history_of(3), &threshold_catalog(100, 500), POINTS_PER_DONATION);
        assert_eq!(report.total_points, 3 * u64::from(POINTS_PER_DONATION));
    }

    #[test]
    fn total_points_adds_unlocked_rewards() {
        let report = evaluate(&history_of(5), &AchievementCatalog::standard(), POINTS_PER_DONATION);
        // 5 donations at 10 points, plus First Drop (50) and Regular Donor (150).
        assert_eq!(report.total_points, 50 + 50 + 150);
    }

    #[test]
    fn report_preserves_catalog_order() {
        let catalog = AchievementCatalog::standard();
        let report = evaluate(&history_of(1), &catalog, POINTS_PER_DONATION);
        let reported: Vec<&str> =
            report.statuses.iter().map(|status| status.definition.id.as_str()).collect();
        let registered: Vec<&str> =
            catalog.definitions().iter().map(|definition| definition.id.as_str()).collect();
        assert_eq!(reported, registered);
    }

    #[test]
    fn evaluation_is_a_pure_recomputation() {
        let history = history_of(6);
        let catalog = AchievementCatalog::standard();
        assert_eq!(
            evaluate(&history, &catalog, POINTS_PER_DONATION),
            evaluate(&history, &catalog, POINTS_PER_DONATION)
        );
    }

    #[test]
    fn empty_catalog_reports_no_statuses() {
        let report = evaluate(&history_of(2), &AchievementCatalog::new(), POINTS_PER_DONATION);
        assert!(report.statuses.is_empty());
        assert_eq!(report.total_points, 2 * u64::from(POINTS_PER_DONATION));
    }
}
