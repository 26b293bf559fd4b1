use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::division::Division;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    Time,
    Repetitions,
    Weight,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Time => "time",
            ScoringMode::Repetitions => "repetitions",
            ScoringMode::Weight => "weight",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(ScoringMode::Time),
            "repetitions" => Ok(ScoringMode::Repetitions),
            "weight" => Ok(ScoringMode::Weight),
            other => Err(EngineError::UnknownScoringMode(other.to_string())),
        }
    }
}

/// One athlete's result for one workout.
///
/// The store guarantees at most one submission per (workout, athlete);
/// the engine assumes it and does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreSubmission {
    pub athlete_id: Uuid,
    pub athlete_name: String,
    pub division: Division,
    pub scoring_mode: ScoringMode,
    /// Comparable magnitude: seconds for time, count for repetitions,
    /// kilograms (or the workout's unit) for weight. Absent = malformed
    /// record, excluded from ranking with a skip count.
    pub numeric_value: Option<Decimal>,
    /// Pre-formatted display string (e.g. "5:30"); never affects ranking.
    pub raw_display: Option<String>,
    /// Meaningful only for workouts scored under a time cap. Absent on
    /// legacy records, which are assumed to have finished within the cap.
    pub completed_within_cap: Option<bool>,
    pub submitted_at: NaiveDateTime,
}
