use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::Score;

/// Request payload for submitting (or replacing) a score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub athlete_id: Uuid,

    #[validate(custom(function = "validate_division"))]
    pub division: String,

    #[validate(custom(function = "validate_scoring_mode"))]
    pub scoring_mode: String,

    pub numeric_value: Option<Decimal>,

    #[validate(length(max = 64))]
    pub raw_display: Option<String>,

    pub completed_within_cap: Option<bool>,
}

fn validate_division(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<engine::Division>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_division"))
}

fn validate_scoring_mode(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<engine::ScoringMode>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_scoring_mode"))
}

/// Response containing the stored score
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreResponse {
    pub score_id: Uuid,
    pub workout_id: Uuid,
    pub athlete_id: Uuid,
    pub division: String,
    pub scoring_mode: String,
    pub numeric_value: Option<f64>,
    pub raw_display: Option<String>,
    pub completed_within_cap: Option<bool>,
    pub submitted_at: chrono::NaiveDateTime,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            score_id: score.score_id,
            workout_id: score.workout_id,
            athlete_id: score.athlete_id,
            division: score.division,
            scoring_mode: score.scoring_mode,
            numeric_value: score.numeric_value.map(super::decimal_to_f64),
            raw_display: score.raw_display,
            completed_within_cap: score.completed_within_cap,
            submitted_at: score.submitted_at,
        }
    }
}
