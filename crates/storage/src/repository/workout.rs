use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Workout;

/// Repository for workout metadata lookups.
pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, event_id, name, scoring_mode, unit,
                   time_cap_seconds, sequence, created_at
            FROM workouts
            WHERE workout_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// An event's workout columns in their caller-defined order.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, event_id, name, scoring_mode, unit,
                   time_cap_seconds, sequence, created_at
            FROM workouts
            WHERE event_id = $1
            ORDER BY sequence ASC, created_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }
}
