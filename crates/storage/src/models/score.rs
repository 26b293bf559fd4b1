use engine::{ScoreSubmission, ScoringMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub workout_id: Uuid,
    pub athlete_id: Uuid,
    pub division: String,
    pub scoring_mode: String,
    pub numeric_value: Option<Decimal>,
    pub raw_display: Option<String>,
    pub completed_within_cap: Option<bool>,
    pub submitted_at: chrono::NaiveDateTime,
}

/// A score row joined with the athlete's display name, the shape the
/// ranking services feed into the engine.
#[derive(Debug, Clone, FromRow)]
pub struct ScoreWithAthlete {
    pub score_id: Uuid,
    pub workout_id: Uuid,
    pub athlete_id: Uuid,
    pub athlete_name: String,
    pub division: String,
    pub scoring_mode: String,
    pub numeric_value: Option<Decimal>,
    pub raw_display: Option<String>,
    pub completed_within_cap: Option<bool>,
    pub submitted_at: chrono::NaiveDateTime,
}

impl ScoreWithAthlete {
    /// Convert into an engine submission. Rows whose stored division or
    /// scoring mode falls outside the closed vocabulary yield `None` and
    /// are counted as skipped by the caller.
    pub fn into_submission(self) -> Option<ScoreSubmission> {
        let division = self.division.parse().ok()?;
        let scoring_mode: ScoringMode = self.scoring_mode.parse().ok()?;
        Some(ScoreSubmission {
            athlete_id: self.athlete_id,
            athlete_name: self.athlete_name,
            division,
            scoring_mode,
            numeric_value: self.numeric_value,
            raw_display: self.raw_display,
            completed_within_cap: self.completed_within_cap,
            submitted_at: self.submitted_at,
        })
    }
}
