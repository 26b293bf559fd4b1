use engine::{Division, StandingsTable};
use sqlx::PgPool;
use storage::{
    error::Result,
    models::{Event, Workout},
    services::ranking,
};

/// Build the placement-points standings table for one event and division
pub async fn event_standings(
    pool: &PgPool,
    slug: &str,
    division: Division,
) -> Result<(Event, Vec<Workout>, StandingsTable)> {
    ranking::event_standings(pool, slug, division).await
}
