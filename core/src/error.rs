use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be at least 1x1")]
    InvalidDimension,
    #[error("Too many mines to leave a safe starting zone")]
    InsufficientCapacity,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("No game exists with this identifier")]
    NoSuchGame,
    #[error("It is not this player's turn to move")]
    NotYourTurn,
    #[error("This cell has already been revealed")]
    AlreadyRevealed,
    #[error("Game already ended, no new moves are accepted")]
    GameFinished,
    #[error("Mines have already been placed on this board")]
    MinesAlreadyPlaced,
}

pub type Result<T> = core::result::Result<T, GameError>;
