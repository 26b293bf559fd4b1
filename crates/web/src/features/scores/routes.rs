use axum::{Router, routing::post};
use storage::Database;

use super::handlers::submit_score;

pub fn routes() -> Router<Database> {
    Router::new().route("/:workout_id/scores", post(submit_score))
}
