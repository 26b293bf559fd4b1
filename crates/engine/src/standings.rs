use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::division::{Division, TrackFilter};
use crate::leaderboard;
use crate::score::{ScoreSubmission, ScoringMode};

/// One workout's identity and scoring contract within an event. Column
/// order is caller-defined and preserved in the output.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkoutColumn {
    pub workout_id: Uuid,
    pub display_name: String,
    /// `None` when the workout's metadata could not be resolved; such a
    /// column is excluded from aggregation and reported, never fatal.
    pub scoring_mode: Option<ScoringMode>,
    pub unit: Option<String>,
}

/// A workout column paired with its full candidate submission set.
#[derive(Debug, Clone)]
pub struct ColumnScores {
    pub column: WorkoutColumn,
    pub submissions: Vec<ScoreSubmission>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkoutCell {
    pub position: u32,
    pub points: u32,
    pub raw_display: Option<String>,
}

/// One row of the event table. `total_points` is the sum of placement
/// points over the workouts the athlete has a cell for; lower wins.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AthleteStanding {
    pub athlete_id: Uuid,
    pub athlete_name: String,
    pub division: Division,
    pub total_points: u32,
    pub overall_rank: u32,
    pub cells: HashMap<Uuid, WorkoutCell>,
}

impl AthleteStanding {
    fn best_position(&self) -> u32 {
        self.cells
            .values()
            .map(|c| c.position)
            .min()
            .unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StandingsTable {
    pub standings: Vec<AthleteStanding>,
    /// Workouts excluded because their scoring mode could not be resolved.
    pub skipped_workouts: Vec<Uuid>,
    /// Malformed submissions excluded across all ranked workouts.
    pub skipped_submissions: u32,
}

/// Build the event-wide standings table for one division.
///
/// Each column is ranked with the workout leaderboard, uncapped; placement
/// points equal the athlete's position (1st = 1). An athlete missing from a
/// workout gets no cell and contributes no points for it. The overall order
/// is total points ascending, ties broken by the athlete's best single
/// workout position, then athlete id.
pub fn event_standings(division: Division, columns: &[ColumnScores]) -> StandingsTable {
    let mut skipped_workouts = Vec::new();
    let mut skipped_submissions = 0u32;
    let mut rows: HashMap<Uuid, AthleteStanding> = HashMap::new();

    for scored in columns {
        let Some(mode) = scored.column.scoring_mode else {
            skipped_workouts.push(scored.column.workout_id);
            continue;
        };

        let board = leaderboard::rank_workout(
            mode,
            TrackFilter::Division(division),
            &scored.submissions,
            None,
        );
        skipped_submissions += board.skipped;

        for entry in board.entries {
            let standing = rows
                .entry(entry.athlete_id)
                .or_insert_with(|| AthleteStanding {
                    athlete_id: entry.athlete_id,
                    athlete_name: entry.athlete_name.clone(),
                    division,
                    total_points: 0,
                    overall_rank: 0,
                    cells: HashMap::new(),
                });
            standing.total_points += entry.position;
            standing.cells.insert(
                scored.column.workout_id,
                WorkoutCell {
                    position: entry.position,
                    points: entry.position,
                    raw_display: entry.raw_display,
                },
            );
        }
    }

    let mut standings: Vec<_> = rows.into_values().collect();
    standings.sort_by(|a, b| {
        a.total_points
            .cmp(&b.total_points)
            .then_with(|| a.best_position().cmp(&b.best_position()))
            .then_with(|| a.athlete_id.cmp(&b.athlete_id))
    });
    for (idx, standing) in standings.iter_mut().enumerate() {
        standing.overall_rank = idx as u32 + 1;
    }

    StandingsTable {
        standings,
        skipped_workouts,
        skipped_submissions,
    }
}
