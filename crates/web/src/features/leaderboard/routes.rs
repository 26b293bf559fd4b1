use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_athlete_rank, get_workout_leaderboard};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:workout_id/leaderboard", get(get_workout_leaderboard))
        .route("/:workout_id/leaderboard/rank", get(get_athlete_rank))
}
