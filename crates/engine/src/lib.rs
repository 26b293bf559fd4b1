pub mod division;
pub mod error;
pub mod leaderboard;
pub mod normalize;
pub mod score;
pub mod sort;
pub mod standings;

pub use division::{Division, Gender, Tier, TrackFilter};
pub use error::{EngineError, Result};
pub use leaderboard::{Leaderboard, RankedEntry, athlete_rank, rank_workout};
pub use score::{ScoreSubmission, ScoringMode};
pub use standings::{
    AthleteStanding, ColumnScores, StandingsTable, WorkoutCell, WorkoutColumn, event_standings,
};
