use engine::{Leaderboard, TrackFilter};
use sqlx::PgPool;
use storage::{error::Result, models::Workout, services::ranking};
use uuid::Uuid;

/// Rank one workout's submissions for a track, optionally capped
pub async fn workout_leaderboard(
    pool: &PgPool,
    workout_id: Uuid,
    filter: TrackFilter,
    limit: Option<usize>,
) -> Result<(Workout, Leaderboard)> {
    ranking::workout_leaderboard(pool, workout_id, filter, limit).await
}

/// Look up one athlete's position without materializing the full table
pub async fn athlete_rank(
    pool: &PgPool,
    workout_id: Uuid,
    athlete_id: Uuid,
    filter: TrackFilter,
) -> Result<(Workout, Option<u32>)> {
    ranking::athlete_rank(pool, workout_id, athlete_id, filter).await
}
