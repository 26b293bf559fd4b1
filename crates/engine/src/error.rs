use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown division: {0}")]
    UnknownDivision(String),

    #[error("Unknown track filter: {0}")]
    UnknownTrack(String),

    #[error("Unknown scoring mode: {0}")]
    UnknownScoringMode(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
