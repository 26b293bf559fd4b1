use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{ScoreResponse, SubmitScoreRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/workouts/{workout_id}/scores",
    params(
        ("workout_id" = Uuid, Path, description = "Workout the score belongs to")
    ),
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score stored; resubmission replaces the previous one", body = ScoreResponse),
        (status = 400, description = "Invalid request payload"),
        (status = 409, description = "Unknown workout or athlete")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(db): State<Database>,
    Path(workout_id): Path<Uuid>,
    Json(request): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let score = services::submit_score(db.pool(), workout_id, &request).await?;

    tracing::info!(
        workout_id = %workout_id,
        athlete_id = %score.athlete_id,
        "score submitted"
    );

    Ok(Json(ScoreResponse::from(score)).into_response())
}
