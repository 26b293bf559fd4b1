use engine::{
    ColumnScores, Division, Leaderboard, ScoreSubmission, ScoringMode, StandingsTable,
    TrackFilter, WorkoutColumn,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Event, ScoreWithAthlete, Workout};
use crate::repository::event::EventRepository;
use crate::repository::score::ScoreRepository;
use crate::repository::workout::WorkoutRepository;

/// Rank one workout's current submissions.
///
/// Fetches the candidate set, resolves rows into engine submissions and
/// delegates the ranking itself to the engine. Rows that do not resolve
/// (out-of-vocabulary division or mode) join the engine's skip count.
pub async fn workout_leaderboard(
    pool: &PgPool,
    workout_id: Uuid,
    filter: TrackFilter,
    limit: Option<usize>,
) -> Result<(Workout, Leaderboard)> {
    let workout = WorkoutRepository::new(pool).find_by_id(workout_id).await?;
    let mode = workout_mode(&workout)?;

    let rows = ScoreRepository::new(pool).list_for_workout(workout_id).await?;
    let (submissions, dropped) = resolve_rows(rows);

    let mut board = engine::rank_workout(mode, filter, &submissions, limit);
    board.skipped += dropped;

    Ok((workout, board))
}

/// A single athlete's position in the workout's full filtered ranking.
/// `None` means unranked.
pub async fn athlete_rank(
    pool: &PgPool,
    workout_id: Uuid,
    athlete_id: Uuid,
    filter: TrackFilter,
) -> Result<(Workout, Option<u32>)> {
    let workout = WorkoutRepository::new(pool).find_by_id(workout_id).await?;
    let mode = workout_mode(&workout)?;

    let rows = ScoreRepository::new(pool).list_for_workout(workout_id).await?;
    let (submissions, _) = resolve_rows(rows);

    let position = engine::athlete_rank(mode, filter, &submissions, athlete_id);
    Ok((workout, position))
}

/// Build the event standings table for one division.
///
/// A workout whose stored scoring mode does not resolve is handed to the
/// engine as an unresolvable column, which excludes it from aggregation and
/// reports it, instead of failing the whole table.
pub async fn event_standings(
    pool: &PgPool,
    slug: &str,
    division: Division,
) -> Result<(Event, Vec<Workout>, StandingsTable)> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;
    let workouts = WorkoutRepository::new(pool)
        .list_for_event(event.event_id)
        .await?;

    let score_repo = ScoreRepository::new(pool);
    let mut dropped_total = 0u32;
    let mut columns = Vec::with_capacity(workouts.len());
    for workout in &workouts {
        let rows = score_repo.list_for_workout(workout.workout_id).await?;
        let (submissions, dropped) = resolve_rows(rows);
        dropped_total += dropped;
        columns.push(ColumnScores {
            column: WorkoutColumn {
                workout_id: workout.workout_id,
                display_name: workout.name.clone(),
                scoring_mode: workout.scoring_mode.parse().ok(),
                unit: workout.unit.clone(),
            },
            submissions,
        });
    }

    let mut table = engine::event_standings(division, &columns);
    table.skipped_submissions += dropped_total;

    Ok((event, workouts, table))
}

fn workout_mode(workout: &Workout) -> Result<ScoringMode> {
    workout.scoring_mode.parse().map_err(|_| {
        StorageError::InvalidData(format!(
            "workout {} has unknown scoring mode '{}'",
            workout.workout_id, workout.scoring_mode
        ))
    })
}

fn resolve_rows(rows: Vec<ScoreWithAthlete>) -> (Vec<ScoreSubmission>, u32) {
    let mut dropped = 0u32;
    let submissions = rows
        .into_iter()
        .filter_map(|row| {
            let submission = row.into_submission();
            if submission.is_none() {
                dropped += 1;
            }
            submission
        })
        .collect();
    (submissions, dropped)
}
