use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::division::TrackFilter;
use crate::normalize;
use crate::score::{ScoreSubmission, ScoringMode};
use crate::sort;

/// One athlete's row in a workout leaderboard. Positions are 1-based and
/// unique; ties are already broken by submission time.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RankedEntry {
    pub athlete_id: Uuid,
    pub athlete_name: String,
    pub position: u32,
    pub comparable_value: Decimal,
    pub raw_display: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Leaderboard {
    pub entries: Vec<RankedEntry>,
    /// Malformed submissions excluded from ranking.
    pub skipped: u32,
}

/// Rank one workout's submissions.
///
/// Filters to the requested track, resolves each record against the
/// workout's scoring contract, sorts into a strict total order and assigns
/// 1-based positions. `limit` truncates the result after positions are
/// assigned, so a capped leaderboard keeps the positions each athlete holds
/// within the full filtered population.
pub fn rank_workout(
    mode: ScoringMode,
    filter: TrackFilter,
    submissions: &[ScoreSubmission],
    limit: Option<usize>,
) -> Leaderboard {
    // Hybrid semantics are a property of the workout's whole candidate set,
    // not of the filtered slice.
    let hybrid = normalize::uses_time_cap(mode, submissions);

    let mut skipped = 0u32;
    let mut normalized: Vec<_> = submissions
        .iter()
        .filter(|s| filter.matches(s.division))
        .filter_map(|s| {
            let entry = normalize::normalize(mode, hybrid, s);
            if entry.is_none() {
                skipped += 1;
            }
            entry
        })
        .collect();

    sort::total_order(&mut normalized);

    let entries = normalized
        .iter()
        .enumerate()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(idx, n)| RankedEntry {
            athlete_id: n.submission.athlete_id,
            athlete_name: n.submission.athlete_name.clone(),
            position: idx as u32 + 1,
            comparable_value: n.value,
            raw_display: n.submission.raw_display.clone(),
        })
        .collect();

    Leaderboard { entries, skipped }
}

/// A single athlete's position within the full (uncapped) filtered ranking.
/// `None` is the "unranked" sentinel: no submission, filtered out, or
/// malformed. Never an error.
pub fn athlete_rank(
    mode: ScoringMode,
    filter: TrackFilter,
    submissions: &[ScoreSubmission],
    athlete_id: Uuid,
) -> Option<u32> {
    rank_workout(mode, filter, submissions, None)
        .entries
        .iter()
        .find(|e| e.athlete_id == athlete_id)
        .map(|e| e.position)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    use super::*;
    use crate::division::Division;

    fn at(seconds: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, seconds)
            .unwrap()
    }

    fn submission(
        name: &str,
        division: Division,
        mode: ScoringMode,
        value: i64,
        completed: Option<bool>,
        submitted_at: NaiveDateTime,
    ) -> ScoreSubmission {
        ScoreSubmission {
            athlete_id: Uuid::new_v4(),
            athlete_name: name.to_string(),
            division,
            scoring_mode: mode,
            numeric_value: Some(Decimal::from(value)),
            raw_display: None,
            completed_within_cap: completed,
            submitted_at,
        }
    }

    fn names(board: &Leaderboard) -> Vec<&str> {
        board
            .entries
            .iter()
            .map(|e| e.athlete_name.as_str())
            .collect()
    }

    #[test]
    fn test_time_workout_with_tie() {
        let subs = vec![
            submission("a", Division::MenRx, ScoringMode::Time, 330, None, at(0)),
            submission("b", Division::MenRx, ScoringMode::Time, 330, None, at(1)),
            submission("c", Division::MenRx, ScoringMode::Time, 300, None, at(2)),
        ];
        let board = rank_workout(ScoringMode::Time, TrackFilter::All, &subs, None);
        assert_eq!(names(&board), vec!["c", "a", "b"]);
        let positions: Vec<u32> = board.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(board.skipped, 0);
    }

    #[test]
    fn test_time_capped_amrap_completion_beats_reps() {
        let subs = vec![
            submission(
                "d",
                Division::MenRx,
                ScoringMode::Time,
                480,
                Some(true),
                at(0),
            ),
            submission(
                "e",
                Division::MenRx,
                ScoringMode::Repetitions,
                140,
                Some(false),
                at(1),
            ),
            submission(
                "f",
                Division::MenRx,
                ScoringMode::Time,
                500,
                Some(true),
                at(2),
            ),
        ];
        let board = rank_workout(
            ScoringMode::Time,
            TrackFilter::Division(Division::MenRx),
            &subs,
            None,
        );
        assert_eq!(names(&board), vec!["d", "f", "e"]);
    }

    #[test]
    fn test_hybrid_invariant_every_finisher_above_every_capped() {
        let mut subs = Vec::new();
        for (i, reps) in [400, 250, 999].iter().enumerate() {
            subs.push(submission(
                &format!("capped{i}"),
                Division::WomenRx,
                ScoringMode::Repetitions,
                *reps,
                Some(false),
                at(i as u32),
            ));
        }
        for (i, secs) in [700, 450].iter().enumerate() {
            subs.push(submission(
                &format!("finished{i}"),
                Division::WomenRx,
                ScoringMode::Time,
                *secs,
                Some(true),
                at(10 + i as u32),
            ));
        }
        let board = rank_workout(ScoringMode::Repetitions, TrackFilter::All, &subs, None);
        let worst_finisher = board
            .entries
            .iter()
            .filter(|e| e.athlete_name.starts_with("finished"))
            .map(|e| e.position)
            .max()
            .unwrap();
        let best_capped = board
            .entries
            .iter()
            .filter(|e| e.athlete_name.starts_with("capped"))
            .map(|e| e.position)
            .min()
            .unwrap();
        assert!(worst_finisher < best_capped);
    }

    #[test]
    fn test_track_filter_keeps_rank_continuity_under_limit() {
        let subs: Vec<_> = (0..6)
            .map(|i| {
                let division = if i % 2 == 0 {
                    Division::MenRx
                } else {
                    Division::MenScaled
                };
                submission(
                    &format!("a{i}"),
                    division,
                    ScoringMode::Weight,
                    100 + i,
                    None,
                    at(i as u32),
                )
            })
            .collect();

        let board = rank_workout(
            ScoringMode::Weight,
            TrackFilter::Division(Division::MenRx),
            &subs,
            Some(2),
        );
        // a4 (104kg) and a2 (102kg) lead the three RX entries; positions
        // count within the filtered population, not the truncated page.
        assert_eq!(names(&board), vec!["a4", "a2"]);
        assert_eq!(board.entries[0].position, 1);
        assert_eq!(board.entries[1].position, 2);
    }

    #[test]
    fn test_all_filter_interleaves_divisions() {
        let subs: Vec<_> = Division::ALL
            .iter()
            .enumerate()
            .flat_map(|(d, division)| {
                (0..2).map(move |i| {
                    submission(
                        &format!("{division}-{i}"),
                        *division,
                        ScoringMode::Time,
                        (300 + 10 * d + i) as i64,
                        None,
                        at((d * 2 + i) as u32),
                    )
                })
            })
            .collect();
        let board = rank_workout(ScoringMode::Time, TrackFilter::All, &subs, None);
        assert_eq!(board.entries.len(), 8);
        // Interleaved by time, not grouped by division.
        assert_eq!(board.entries[0].athlete_name, "men_rx-0");
        assert_eq!(board.entries[1].athlete_name, "men_rx-1");
        assert_eq!(board.entries[2].athlete_name, "men_scaled-0");
    }

    #[test]
    fn test_empty_and_single_inputs() {
        let board = rank_workout(ScoringMode::Time, TrackFilter::All, &[], None);
        assert!(board.entries.is_empty());

        let solo = vec![submission(
            "only",
            Division::WomenScaled,
            ScoringMode::Time,
            200,
            None,
            at(0),
        )];
        let board = rank_workout(ScoringMode::Time, TrackFilter::All, &solo, None);
        assert_eq!(board.entries[0].position, 1);
    }

    #[test]
    fn test_malformed_submissions_counted_not_fatal() {
        let mut missing_value =
            submission("bad", Division::MenRx, ScoringMode::Time, 0, None, at(0));
        missing_value.numeric_value = None;
        let wrong_mode = submission("odd", Division::MenRx, ScoringMode::Weight, 90, None, at(1));
        let good = submission("ok", Division::MenRx, ScoringMode::Time, 310, None, at(2));

        let board = rank_workout(
            ScoringMode::Time,
            TrackFilter::All,
            &[missing_value, wrong_mode, good],
            None,
        );
        assert_eq!(names(&board), vec!["ok"]);
        assert_eq!(board.skipped, 2);
    }

    #[test]
    fn test_rank_lookup_and_unranked_sentinel() {
        let subs = vec![
            submission("x", Division::MenRx, ScoringMode::Time, 320, None, at(0)),
            submission("y", Division::MenRx, ScoringMode::Time, 310, None, at(1)),
        ];
        let y = subs[1].athlete_id;
        assert_eq!(
            athlete_rank(ScoringMode::Time, TrackFilter::All, &subs, y),
            Some(1)
        );
        assert_eq!(
            athlete_rank(ScoringMode::Time, TrackFilter::All, &subs, Uuid::new_v4()),
            None
        );
        // Filtered out of the track entirely: unranked, not an error.
        assert_eq!(
            athlete_rank(
                ScoringMode::Time,
                TrackFilter::Division(Division::WomenRx),
                &subs,
                y
            ),
            None
        );
    }

    #[test]
    fn test_adding_worse_entry_preserves_existing_order() {
        let mut subs = vec![
            submission("fast", Division::MenRx, ScoringMode::Time, 290, None, at(0)),
            submission("mid", Division::MenRx, ScoringMode::Time, 310, None, at(1)),
        ];
        let before = rank_workout(ScoringMode::Time, TrackFilter::All, &subs, None);

        subs.push(submission(
            "slow",
            Division::MenRx,
            ScoringMode::Time,
            400,
            None,
            at(2),
        ));
        let after = rank_workout(ScoringMode::Time, TrackFilter::All, &subs, None);

        let before_names = names(&before);
        let after_names = names(&after);
        assert_eq!(&after_names[..2], &before_names[..]);
    }
}
