use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::leaderboard::{
        LeaderboardParams, LeaderboardResponse, RankLookupParams, RankLookupResponse,
    },
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts/{workout_id}/leaderboard",
    params(
        ("workout_id" = Uuid, Path, description = "Workout to rank"),
        LeaderboardParams
    ),
    responses(
        (status = 200, description = "Leaderboard retrieved successfully", body = LeaderboardResponse),
        (status = 400, description = "Invalid track filter or limit"),
        (status = 404, description = "Workout not found")
    ),
    tag = "leaderboards"
)]
pub async fn get_workout_leaderboard(
    State(db): State<Database>,
    Path(workout_id): Path<Uuid>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Response, WebError> {
    let (filter, limit) = params.validate().map_err(WebError::BadRequest)?;

    let (workout, board) =
        services::workout_leaderboard(db.pool(), workout_id, filter, limit).await?;

    if board.skipped > 0 {
        tracing::warn!(
            workout_id = %workout_id,
            skipped = board.skipped,
            "excluded malformed submissions from leaderboard"
        );
    }

    Ok(Json(LeaderboardResponse::new(&workout, board)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{workout_id}/leaderboard/rank",
    params(
        ("workout_id" = Uuid, Path, description = "Workout to look up in"),
        RankLookupParams
    ),
    responses(
        (status = 200, description = "Rank lookup result; position is null when unranked", body = RankLookupResponse),
        (status = 400, description = "Invalid track filter"),
        (status = 404, description = "Workout not found")
    ),
    tag = "leaderboards"
)]
pub async fn get_athlete_rank(
    State(db): State<Database>,
    Path(workout_id): Path<Uuid>,
    Query(params): Query<RankLookupParams>,
) -> Result<Response, WebError> {
    let filter = params.track_filter().map_err(WebError::BadRequest)?;

    let (workout, position) =
        services::athlete_rank(db.pool(), workout_id, params.athlete_id, filter).await?;

    Ok(Json(RankLookupResponse {
        workout_id: workout.workout_id,
        athlete_id: params.athlete_id,
        position,
    })
    .into_response())
}
