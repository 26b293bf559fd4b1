mod event;
mod score;
mod workout;

pub use event::Event;
pub use score::{Score, ScoreWithAthlete};
pub use workout::Workout;
