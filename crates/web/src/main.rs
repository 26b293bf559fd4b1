use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::leaderboard::handlers::get_workout_leaderboard,
        features::leaderboard::handlers::get_athlete_rank,
        features::standings::handlers::get_event_standings,
        features::scores::handlers::submit_score,
    ),
    components(
        schemas(
            storage::dto::leaderboard::LeaderboardResponse,
            storage::dto::leaderboard::RankedEntryDto,
            storage::dto::leaderboard::RankLookupResponse,
            storage::dto::standings::StandingsResponse,
            storage::dto::standings::ColumnInfo,
            storage::dto::score::SubmitScoreRequest,
            storage::dto::score::ScoreResponse,
            engine::Division,
            engine::ScoringMode,
            engine::AthleteStanding,
            engine::WorkoutCell,
        )
    ),
    tags(
        (name = "leaderboards", description = "Workout leaderboard endpoints"),
        (name = "standings", description = "Event standings endpoints"),
        (name = "scores", description = "Score submission endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting WodBoard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api/workouts",
            features::leaderboard::routes::routes().merge(features::scores::routes::routes()),
        )
        .nest("/api/events", features::standings::routes::routes())
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
