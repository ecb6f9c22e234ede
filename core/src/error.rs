use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be between 1 and 255 cells wide and tall")]
    InvalidSize,
    #[error("Mine probability must be within 0.0 and 1.0")]
    InvalidProbability,
}

pub type Result<T> = core::result::Result<T, GameError>;
