use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scored workout, either standalone (gym programming) or one column of
/// an event. `scoring_mode` is stored as text and resolved against the
/// engine vocabulary at ranking time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub workout_id: Uuid,
    pub event_id: Option<Uuid>,
    pub name: String,
    pub scoring_mode: String,
    pub unit: Option<String>,
    pub time_cap_seconds: Option<i32>,
    pub sequence: i16,
    pub created_at: chrono::NaiveDateTime,
}
