//! Donor cooling-off assessment.
//!
//! A donor must wait a fixed recovery window after each completed donation
//! before donating again. The window length comes from configuration
//! ([`crate::config::EngineConfig::recovery_window_days`]); nothing here
//! hardcodes it. "Now" is always an explicit parameter so the assessment is
//! deterministic and testable.

use chrono::{DateTime, Duration, Utc};
use lifelink_types::{Donation, DonationStatus, Eligibility};
use tracing::instrument;

const SECONDS_PER_DAY: i64 = 86_400;

/// Assesses eligibility from the last completed donation, if any.
///
/// A donor who has never completed a donation is immediately eligible with
/// zero days remaining. Otherwise the donor becomes eligible once
/// `recovery_window_days` whole days have elapsed; `days_remaining` is the
/// ceiling of the remaining time in days, clamped to zero.
pub fn assess(
    last_completed: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    recovery_window_days: u32,
) -> Eligibility {
    let Some(last) = last_completed else {
        return Eligibility { is_eligible: true, days_remaining: 0, next_eligible: now };
    };

    let next_eligible = last + Duration::days(i64::from(recovery_window_days));
    let remaining_secs = (next_eligible - now).num_seconds();

    if remaining_secs <= 0 {
        Eligibility { is_eligible: true, days_remaining: 0, next_eligible }
    } else {
        Eligibility {
            is_eligible: false,
            days_remaining: (remaining_secs as u64).div_ceil(SECONDS_PER_DAY as u64) as u32,
            next_eligible,
        }
    }
}

/// The timestamp of the newest completed donation in a newest-first history.
///
/// Pending and cancelled entries never count toward the recovery window.
pub fn last_completed_donation(history: &[Donation]) -> Option<DateTime<Utc>> {
    history
        .iter()
        .find(|donation| donation.status == DonationStatus::Completed)
        .map(|donation| donation.donated_at)
}

/// Assesses eligibility straight from a fetched history (newest first).
#[instrument(skip(history), fields(history_len = history.len()))]
pub fn assess_from_history(
    history: &[Donation],
    now: DateTime<Utc>,
    recovery_window_days: u32,
) -> Eligibility {
    assess(last_completed_donation(history), now, recovery_window_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    const WINDOW: u32 = 90;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::days(i64::from(day))
    }

    fn donation(donated_at: DateTime<Utc>, status: DonationStatus) -> Donation {
        Donation { id: Uuid::new_v4(), donated_at, status, urgency: None }
    }

    #[test]
    fn never_donated_is_immediately_eligible() {
        let verdict = assess(None, at(0), WINDOW);
        assert!(verdict.is_eligible);
        assert_eq!(verdict.days_remaining, 0);
        assert_eq!(verdict.next_eligible, at(0));
    }

    #[test]
    fn eligible_exactly_when_the_window_has_elapsed() {
        let verdict = assess(Some(at(0)), at(WINDOW), WINDOW);
        assert!(verdict.is_eligible);
        assert_eq!(verdict.days_remaining, 0);
    }

    #[test]
    fn one_day_in_leaves_window_minus_one_days() {
        let verdict = assess(Some(at(0)), at(1), WINDOW);
        assert!(!verdict.is_eligible);
        assert_eq!(verdict.days_remaining, WINDOW - 1);
        assert_eq!(verdict.next_eligible, at(WINDOW));
    }

    #[test]
    fn partial_days_round_up() {
        let now = at(1) + Duration::hours(6);
        let verdict = assess(Some(at(0)), now, WINDOW);
        assert_eq!(verdict.days_remaining, WINDOW - 1);
    }

    #[test]
    fn days_remaining_clamps_to_zero_long_after_the_window() {
        let verdict = assess(Some(at(0)), at(WINDOW * 3), WINDOW);
        assert!(verdict.is_eligible);
        assert_eq!(verdict.days_remaining, 0);
        assert_eq!(verdict.next_eligible, at(WINDOW));
    }

    #[test]
    fn window_length_is_not_hardcoded() {
        let verdict = assess(Some(at(0)), at(56), 56);
        assert!(verdict.is_eligible);
        let verdict = assess(Some(at(0)), at(55), 56);
        assert!(!verdict.is_eligible);
        assert_eq!(verdict.days_remaining, 1);
    }

    #[test]
    fn history_assessment_skips_pending_and_cancelled() {
        let history = vec![
            donation(at(80), DonationStatus::Pending),
            donation(at(70), DonationStatus::Cancelled),
            donation(at(10), DonationStatus::Completed),
            donation(at(0), DonationStatus::Completed),
        ];
        assert_eq!(last_completed_donation(&history), Some(at(10)));

        let verdict = assess_from_history(&history, at(40), WINDOW);
        assert!(!verdict.is_eligible);
        assert_eq!(verdict.days_remaining, WINDOW - 30);
    }

    #[test]
    fn empty_history_is_eligible() {
        let verdict = assess_from_history(&[], at(5), WINDOW);
        assert!(verdict.is_eligible);
        assert_eq!(verdict.days_remaining, 0);
    }

    #[test]
    fn assessment_is_deterministic() {
        let history = vec![donation(at(0), DonationStatus::Completed)];
        assert_eq!(
            assess_from_history(&history, at(3), WINDOW),
            assess_from_history(&history, at(3), WINDOW)
        );
    }
}
