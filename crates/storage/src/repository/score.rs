use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::score::SubmitScoreRequest;
use crate::error::{Result, StorageError};
use crate::models::{Score, ScoreWithAthlete};

/// Repository for score submissions.
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All current submissions for one workout, joined with athlete names.
    /// The UNIQUE (workout_id, athlete_id) constraint guarantees one row
    /// per athlete.
    pub async fn list_for_workout(&self, workout_id: Uuid) -> Result<Vec<ScoreWithAthlete>> {
        let scores = sqlx::query_as::<_, ScoreWithAthlete>(
            r#"
            SELECT s.score_id, s.workout_id, s.athlete_id,
                   a.display_name AS athlete_name,
                   s.division, s.scoring_mode, s.numeric_value, s.raw_display,
                   s.completed_within_cap, s.submitted_at
            FROM scores s
            INNER JOIN athletes a ON s.athlete_id = a.athlete_id
            WHERE s.workout_id = $1
            ORDER BY s.submitted_at ASC
            "#,
        )
        .bind(workout_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Insert an athlete's score, replacing any earlier submission for the
    /// same workout. Resubmission refreshes `submitted_at`, so an edited
    /// score goes to the back of the tie-break queue.
    pub async fn upsert(&self, workout_id: Uuid, req: &SubmitScoreRequest) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (
                workout_id, athlete_id, division, scoring_mode,
                numeric_value, raw_display, completed_within_cap
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (workout_id, athlete_id)
            DO UPDATE SET
                division = EXCLUDED.division,
                scoring_mode = EXCLUDED.scoring_mode,
                numeric_value = EXCLUDED.numeric_value,
                raw_display = EXCLUDED.raw_display,
                completed_within_cap = EXCLUDED.completed_within_cap,
                submitted_at = NOW()
            RETURNING score_id, workout_id, athlete_id, division, scoring_mode,
                      numeric_value, raw_display, completed_within_cap, submitted_at
            "#,
        )
        .bind(workout_id)
        .bind(req.athlete_id)
        .bind(&req.division)
        .bind(&req.scoring_mode)
        .bind(req.numeric_value)
        .bind(&req.raw_display)
        .bind(req.completed_within_cap)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23503") {
                    return StorageError::ConstraintViolation(
                        "Unknown workout or athlete".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(score)
    }
}
