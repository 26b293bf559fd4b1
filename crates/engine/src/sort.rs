use std::cmp::Ordering;

use crate::normalize::{NormalizedScore, SortDirection};

/// Order two normalized entries: finished tier first, then value per the
/// tier's direction, then earlier submission, then athlete id.
///
/// The trailing keys make this a strict total order — equal values never
/// share a position, the earlier submission takes the better one.
fn compare(a: &NormalizedScore<'_>, b: &NormalizedScore<'_>) -> Ordering {
    b.finished
        .cmp(&a.finished)
        .then_with(|| match a.direction {
            SortDirection::Ascending => a.value.cmp(&b.value),
            SortDirection::Descending => b.value.cmp(&a.value),
        })
        .then_with(|| a.submission.submitted_at.cmp(&b.submission.submitted_at))
        .then_with(|| a.submission.athlete_id.cmp(&b.submission.athlete_id))
}

/// Sort entries into their final ranking order. Deterministic: identical
/// input always produces identical output.
pub fn total_order(entries: &mut [NormalizedScore<'_>]) {
    entries.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::division::Division;
    use crate::score::{ScoreSubmission, ScoringMode};

    fn at(seconds: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, seconds)
            .unwrap()
    }

    fn time_submission(name: &str, value: i64, submitted_at: NaiveDateTime) -> ScoreSubmission {
        ScoreSubmission {
            athlete_id: Uuid::new_v4(),
            athlete_name: name.to_string(),
            division: Division::WomenRx,
            scoring_mode: ScoringMode::Time,
            numeric_value: Some(Decimal::from(value)),
            raw_display: None,
            completed_within_cap: None,
            submitted_at,
        }
    }

    fn ordered_names(submissions: &[ScoreSubmission]) -> Vec<String> {
        let mut entries: Vec<_> = submissions
            .iter()
            .filter_map(|s| crate::normalize::normalize(ScoringMode::Time, false, s))
            .collect();
        total_order(&mut entries);
        entries
            .iter()
            .map(|e| e.submission.athlete_name.clone())
            .collect()
    }

    #[test]
    fn test_lower_time_wins() {
        let subs = vec![
            time_submission("a", 330, at(0)),
            time_submission("c", 300, at(2)),
            time_submission("b", 330, at(1)),
        ];
        assert_eq!(ordered_names(&subs), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_tie_broken_by_earlier_submission() {
        let subs = vec![
            time_submission("late", 300, at(30)),
            time_submission("early", 300, at(10)),
        ];
        assert_eq!(ordered_names(&subs), vec!["early", "late"]);
    }

    #[test]
    fn test_all_tied_ordered_by_submission_time() {
        let subs = vec![
            time_submission("third", 250, at(3)),
            time_submission("first", 250, at(1)),
            time_submission("second", 250, at(2)),
        ];
        assert_eq!(ordered_names(&subs), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_finished_tier_always_above_capped_tier() {
        let mut capped = time_submission("capped", 9999, at(0));
        capped.scoring_mode = ScoringMode::Repetitions;
        capped.completed_within_cap = Some(false);
        let mut finished = time_submission("finished", 480, at(1));
        finished.completed_within_cap = Some(true);

        let mut entries: Vec<_> = [&capped, &finished]
            .into_iter()
            .filter_map(|s| crate::normalize::normalize(ScoringMode::Time, true, s))
            .collect();
        total_order(&mut entries);

        assert_eq!(entries[0].submission.athlete_name, "finished");
        assert_eq!(entries[1].submission.athlete_name, "capped");
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let subs = vec![
            time_submission("a", 300, at(5)),
            time_submission("b", 290, at(5)),
            time_submission("c", 300, at(5)),
        ];
        assert_eq!(ordered_names(&subs), ordered_names(&subs));
    }
}
