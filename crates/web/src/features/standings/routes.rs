use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_event_standings;

pub fn routes() -> Router<Database> {
    Router::new().route("/:slug/standings", get(get_event_standings))
}
