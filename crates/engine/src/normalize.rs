use rust_decimal::Decimal;

use crate::score::{ScoreSubmission, ScoringMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lower value wins (time).
    Ascending,
    /// Higher value wins (repetitions, weight).
    Descending,
}

/// A submission resolved to its comparable form: which tier it sorts in,
/// the magnitude to compare, and the direction for that tier.
#[derive(Debug, Clone)]
pub struct NormalizedScore<'a> {
    pub submission: &'a ScoreSubmission,
    /// Finished-within-cap tier. Every finished entry outranks every
    /// non-finished entry regardless of magnitude.
    pub finished: bool,
    pub value: Decimal,
    pub direction: SortDirection,
}

/// Whether the time-cap hybrid rule is in play for a workout: the nominal
/// mode must be time or repetitions, and at least one record in the
/// workout's candidate set must carry the completion flag.
///
/// Detected over the unfiltered candidate set so that a division filter
/// cannot flip the workout between plain and hybrid semantics.
pub fn uses_time_cap(mode: ScoringMode, submissions: &[ScoreSubmission]) -> bool {
    matches!(mode, ScoringMode::Time | ScoringMode::Repetitions)
        && submissions.iter().any(|s| s.completed_within_cap.is_some())
}

/// Resolve one submission against the workout's scoring contract.
///
/// Returns `None` for malformed records: a missing numeric value, or a
/// declared mode that cannot supply the magnitude the comparator needs.
/// Callers count these as skipped rather than failing the whole ranking.
pub fn normalize(
    mode: ScoringMode,
    hybrid: bool,
    submission: &ScoreSubmission,
) -> Option<NormalizedScore<'_>> {
    let value = submission.numeric_value?;

    if hybrid {
        if submission.scoring_mode == ScoringMode::Weight {
            return None;
        }
        // Absent flag is a legacy record: assumed finished, value read as
        // elapsed time.
        let finished = submission.completed_within_cap.unwrap_or(true);
        let direction = if finished {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        return Some(NormalizedScore {
            submission,
            finished,
            value,
            direction,
        });
    }

    if submission.scoring_mode != mode {
        return None;
    }

    let direction = match mode {
        ScoringMode::Time => SortDirection::Ascending,
        ScoringMode::Repetitions | ScoringMode::Weight => SortDirection::Descending,
    };

    Some(NormalizedScore {
        submission,
        finished: true,
        value,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::division::Division;

    fn submission(
        mode: ScoringMode,
        value: Option<i64>,
        completed: Option<bool>,
    ) -> ScoreSubmission {
        ScoreSubmission {
            athlete_id: Uuid::new_v4(),
            athlete_name: "A. Athlete".to_string(),
            division: Division::MenRx,
            scoring_mode: mode,
            numeric_value: value.map(Decimal::from),
            raw_display: None,
            completed_within_cap: completed,
            submitted_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_weight_is_descending() {
        let sub = submission(ScoringMode::Weight, Some(120), None);
        let normalized = normalize(ScoringMode::Weight, false, &sub).unwrap();
        assert!(normalized.finished);
        assert_eq!(normalized.direction, SortDirection::Descending);
        assert_eq!(normalized.value, Decimal::from(120));
    }

    #[test]
    fn test_plain_time_is_ascending() {
        let sub = submission(ScoringMode::Time, Some(330), None);
        let normalized = normalize(ScoringMode::Time, false, &sub).unwrap();
        assert_eq!(normalized.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_plain_repetitions_is_descending() {
        let sub = submission(ScoringMode::Repetitions, Some(140), None);
        let normalized = normalize(ScoringMode::Repetitions, false, &sub).unwrap();
        assert!(normalized.finished);
        assert_eq!(normalized.direction, SortDirection::Descending);
    }

    #[test]
    fn test_hybrid_finisher_compared_by_time() {
        let sub = submission(ScoringMode::Time, Some(480), Some(true));
        let normalized = normalize(ScoringMode::Time, true, &sub).unwrap();
        assert!(normalized.finished);
        assert_eq!(normalized.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_hybrid_capped_compared_by_reps() {
        let sub = submission(ScoringMode::Repetitions, Some(140), Some(false));
        let normalized = normalize(ScoringMode::Time, true, &sub).unwrap();
        assert!(!normalized.finished);
        assert_eq!(normalized.direction, SortDirection::Descending);
    }

    #[test]
    fn test_hybrid_legacy_record_assumed_finished() {
        let sub = submission(ScoringMode::Time, Some(505), None);
        let normalized = normalize(ScoringMode::Time, true, &sub).unwrap();
        assert!(normalized.finished);
        assert_eq!(normalized.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_missing_value_is_skipped() {
        let sub = submission(ScoringMode::Time, None, None);
        assert!(normalize(ScoringMode::Time, false, &sub).is_none());
    }

    #[test]
    fn test_mode_mismatch_is_skipped() {
        let sub = submission(ScoringMode::Repetitions, Some(90), None);
        assert!(normalize(ScoringMode::Weight, false, &sub).is_none());

        let weight_in_hybrid = submission(ScoringMode::Weight, Some(90), Some(true));
        assert!(normalize(ScoringMode::Time, true, &weight_in_hybrid).is_none());
    }

    #[test]
    fn test_time_cap_detection() {
        let plain = vec![
            submission(ScoringMode::Repetitions, Some(100), None),
            submission(ScoringMode::Repetitions, Some(90), None),
        ];
        assert!(!uses_time_cap(ScoringMode::Repetitions, &plain));

        let hybrid = vec![
            submission(ScoringMode::Time, Some(480), Some(true)),
            submission(ScoringMode::Repetitions, Some(140), Some(false)),
        ];
        assert!(uses_time_cap(ScoringMode::Time, &hybrid));

        // Completion flags never make a weight workout hybrid.
        let weight = vec![submission(ScoringMode::Weight, Some(120), Some(true))];
        assert!(!uses_time_cap(ScoringMode::Weight, &weight));
    }
}
