use engine::{Leaderboard, RankedEntry, TrackFilter};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::Workout;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardParams {
    /// Track to filter by: a division, a gender, a tier, or "all".
    pub track: Option<String>,
    pub limit: Option<u32>,
}

impl LeaderboardParams {
    pub fn validate(&self) -> Result<(TrackFilter, Option<usize>), String> {
        let filter = parse_track(self.track.as_deref())?;

        if let Some(limit) = self.limit
            && !(1..=500).contains(&limit)
        {
            return Err("limit must be between 1 and 500".to_string());
        }

        Ok((filter, self.limit.map(|l| l as usize)))
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RankLookupParams {
    pub athlete_id: Uuid,
    pub track: Option<String>,
}

impl RankLookupParams {
    pub fn track_filter(&self) -> Result<TrackFilter, String> {
        parse_track(self.track.as_deref())
    }
}

fn parse_track(raw: Option<&str>) -> Result<TrackFilter, String> {
    match raw {
        None => Ok(TrackFilter::All),
        Some(value) => value.parse().map_err(|e: engine::EngineError| e.to_string()),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RankedEntryDto {
    pub athlete_id: Uuid,
    pub athlete_name: String,
    pub position: u32,
    pub comparable_value: f64,
    pub raw_display: Option<String>,
}

impl From<RankedEntry> for RankedEntryDto {
    fn from(entry: RankedEntry) -> Self {
        Self {
            athlete_id: entry.athlete_id,
            athlete_name: entry.athlete_name,
            position: entry.position,
            comparable_value: super::decimal_to_f64(entry.comparable_value),
            raw_display: entry.raw_display,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub workout_id: Uuid,
    pub workout_name: String,
    pub scoring_mode: String,
    pub unit: Option<String>,
    pub entries: Vec<RankedEntryDto>,
    pub skipped: u32,
}

impl LeaderboardResponse {
    pub fn new(workout: &Workout, board: Leaderboard) -> Self {
        Self {
            workout_id: workout.workout_id,
            workout_name: workout.name.clone(),
            scoring_mode: workout.scoring_mode.clone(),
            unit: workout.unit.clone(),
            entries: board.entries.into_iter().map(Into::into).collect(),
            skipped: board.skipped,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RankLookupResponse {
    pub workout_id: Uuid,
    pub athlete_id: Uuid,
    /// `null` means unranked: no submission in this workout's track.
    pub position: Option<u32>,
}
