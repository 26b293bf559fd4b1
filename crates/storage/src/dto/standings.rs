use engine::{AthleteStanding, Division, StandingsTable};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{Event, Workout};

#[derive(Debug, Deserialize, IntoParams)]
pub struct StandingsParams {
    pub division: String,
}

impl StandingsParams {
    pub fn division(&self) -> Result<Division, String> {
        self.division
            .parse()
            .map_err(|e: engine::EngineError| e.to_string())
    }
}

/// Ordered column header of the standings table.
#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnInfo {
    pub workout_id: Uuid,
    pub name: String,
    pub scoring_mode: String,
    pub unit: Option<String>,
    pub time_cap_seconds: Option<i32>,
}

impl From<&Workout> for ColumnInfo {
    fn from(workout: &Workout) -> Self {
        Self {
            workout_id: workout.workout_id,
            name: workout.name.clone(),
            scoring_mode: workout.scoring_mode.clone(),
            unit: workout.unit.clone(),
            time_cap_seconds: workout.time_cap_seconds,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    pub event_id: Uuid,
    pub event_name: String,
    pub division: Division,
    pub columns: Vec<ColumnInfo>,
    pub standings: Vec<AthleteStanding>,
    pub skipped_workouts: Vec<Uuid>,
    pub skipped_submissions: u32,
}

impl StandingsResponse {
    pub fn new(
        event: Event,
        workouts: &[Workout],
        division: Division,
        table: StandingsTable,
    ) -> Self {
        Self {
            event_id: event.event_id,
            event_name: event.name,
            division,
            columns: workouts.iter().map(Into::into).collect(),
            standings: table.standings,
            skipped_workouts: table.skipped_workouts,
            skipped_submissions: table.skipped_submissions,
        }
    }
}
