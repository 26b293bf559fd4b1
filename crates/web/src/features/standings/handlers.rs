use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::standings::{StandingsParams, StandingsResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{slug}/standings",
    params(
        ("slug" = String, Path, description = "Event slug"),
        StandingsParams
    ),
    responses(
        (status = 200, description = "Event standings retrieved successfully", body = StandingsResponse),
        (status = 400, description = "Invalid division"),
        (status = 404, description = "Event not found")
    ),
    tag = "standings"
)]
pub async fn get_event_standings(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Query(params): Query<StandingsParams>,
) -> Result<Response, WebError> {
    let division = params.division().map_err(WebError::BadRequest)?;

    let (event, workouts, table) = services::event_standings(db.pool(), &slug, division).await?;

    if !table.skipped_workouts.is_empty() {
        tracing::warn!(
            event = %event.slug,
            skipped = ?table.skipped_workouts,
            "excluded workouts with unresolvable scoring mode from standings"
        );
    }

    Ok(Json(StandingsResponse::new(event, &workouts, division, table)).into_response())
}
