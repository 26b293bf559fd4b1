use sqlx::PgPool;
use storage::{
    dto::score::SubmitScoreRequest, error::Result, models::Score, repository::score::ScoreRepository,
};
use uuid::Uuid;

/// Submit or replace one athlete's score for a workout
pub async fn submit_score(
    pool: &PgPool,
    workout_id: Uuid,
    request: &SubmitScoreRequest,
) -> Result<Score> {
    let repo = ScoreRepository::new(pool);
    repo.upsert(workout_id, request).await
}
